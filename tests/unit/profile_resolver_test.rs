//! Unit tests for the Profile Resolver.

use std::sync::Arc;

use thinkup::services::preference_store::{PreferenceStore, PreferenceStoreTrait, SETTINGS_KEY};
use thinkup::services::profile_resolver::{apply_profile, resolve, PROFILE_TABLE};
use thinkup::services::storage::{KeyValueStore, MemoryStore};
use thinkup::types::profile::ProfileName;
use thinkup::types::settings::{
    ColorBlindMode, CurrentProfile, FontSize, LineSpacing, SettingField, SettingsRecord,
};

fn store() -> (Arc<MemoryStore>, PreferenceStore) {
    let mem = Arc::new(MemoryStore::new());
    let mut store = PreferenceStore::new(mem.clone());
    store.load();
    (mem, store)
}

// ─── Resolution ───

#[test]
fn test_table_lists_five_profiles_in_panel_order() {
    let names: Vec<&str> = PROFILE_TABLE.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(names, ["dyslexia", "low-vision", "motor", "adhd", "colorblind"]);
}

#[test]
fn test_resolve_is_case_sensitive() {
    assert!(resolve("low-vision").is_some());
    assert!(resolve("Low-Vision").is_none());
    assert!(resolve("").is_none());
}

#[test]
fn test_every_profile_sets_at_least_one_field() {
    for (name, patch) in PROFILE_TABLE.iter() {
        assert!(!patch.fields().is_empty(), "profile {} is empty", name);
        assert!(!patch.fields().contains(&SettingField::CurrentProfile));
    }
}

// ─── Application ───

#[test]
fn test_dyslexia_profile_merges_over_current_record() {
    let (_, mut store) = store();
    store.set_flag(SettingField::HighContrast, true).expect("set failed");
    store.set_speech_rate(1.7);

    assert_eq!(apply_profile(&mut store, "dyslexia"), Some(ProfileName::Dyslexia));
    let record = store.settings();
    assert!(record.dyslexia_font);
    assert_eq!(record.font_size, FontSize::Large);
    assert_eq!(record.line_spacing, LineSpacing::ExtraRelaxed);
    assert_eq!(record.current_profile, CurrentProfile::Dyslexia);
    // Not mentioned by the profile.
    assert!(record.high_contrast);
    assert_eq!(record.speech_rate, 1.7);
}

#[test]
fn test_later_profile_wins_per_field() {
    let (_, mut store) = store();
    apply_profile(&mut store, "low-vision");
    assert!(store.settings().high_contrast);
    apply_profile(&mut store, "colorblind");
    let record = store.settings();
    assert!(!record.high_contrast);
    assert_eq!(record.color_blind_mode, ColorBlindMode::Deuteranopia);
    // Low-vision's font size survives: colorblind does not mention it.
    assert_eq!(record.font_size, FontSize::ExtraLarge);
    assert_eq!(record.current_profile, CurrentProfile::Colorblind);
}

#[test]
fn test_profile_application_is_one_write() {
    let (mem, mut store) = store();
    apply_profile(&mut store, "motor");
    assert_eq!(mem.write_count(), 1);
    let persisted: SettingsRecord =
        serde_json::from_str(&mem.get(SETTINGS_KEY).expect("get failed").expect("nothing saved"))
            .expect("invalid json");
    assert_eq!(&persisted, store.settings());
}

#[test]
fn test_unknown_profile_changes_nothing() {
    let (mem, mut store) = store();
    store.set_font_size("small").expect("set failed");
    let persisted = mem.get(SETTINGS_KEY).expect("get failed");
    let before = store.settings().clone();
    let writes = mem.write_count();

    assert_eq!(apply_profile(&mut store, "not-a-real-profile"), None);
    assert_eq!(store.settings(), &before);
    assert_eq!(mem.get(SETTINGS_KEY).expect("get failed"), persisted);
    assert_eq!(mem.write_count(), writes);
}
