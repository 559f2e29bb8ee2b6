//! Unit tests for the Preference Store.
//!
//! Covers persistence through both storage backends, failure handling, setter validation
//! and numeric clamping.

use std::sync::Arc;

use thinkup::database::Database;
use thinkup::services::preference_store::{PreferenceStore, PreferenceStoreTrait, SETTINGS_KEY};
use thinkup::services::storage::{KeyValueStore, MemoryStore, SqliteStore};
use thinkup::types::errors::PreferenceError;
use thinkup::types::settings::{
    ColorBlindMode, CurrentProfile, CursorSize, FontSize, SettingField, SettingsRecord,
};

fn memory_store() -> (Arc<MemoryStore>, PreferenceStore) {
    let mem = Arc::new(MemoryStore::new());
    let mut store = PreferenceStore::new(mem.clone());
    store.load();
    (mem, store)
}

fn saved(mem: &MemoryStore) -> Option<String> {
    mem.get(SETTINGS_KEY).expect("get failed")
}

// ─── Persistence ───

#[test]
fn test_first_run_is_default_and_unpersisted() {
    let (mem, store) = memory_store();
    assert_eq!(store.settings(), &SettingsRecord::default());
    assert!(!store.has_persisted());
    assert_eq!(saved(&mem), None);
}

#[test]
fn test_every_mutation_writes_the_whole_record() {
    let (mem, mut store) = memory_store();
    store.toggle_flag(SettingField::HighContrast).expect("toggle failed");
    let json: serde_json::Value =
        serde_json::from_str(&saved(&mem).expect("nothing saved")).expect("invalid json");
    let map = json.as_object().expect("not an object");
    assert_eq!(map.len(), SettingField::ALL.len());
    assert_eq!(map["highContrast"], true);
    assert_eq!(map["fontSize"], "normal");
    assert_eq!(map["currentProfile"], "custom");
}

#[test]
fn test_sqlite_round_trip_seeds_next_session() {
    let db = Arc::new(Database::open_in_memory().expect("open failed"));
    let mut first = PreferenceStore::new(Arc::new(SqliteStore::new(db.clone())));
    first.load();
    first.set_font_size("extra-large").expect("set failed");
    first
        .set_choice(SettingField::ColorBlindMode, "tritanopia")
        .expect("set failed");
    first.set_speech_volume(0.4);

    let mut second = PreferenceStore::new(Arc::new(SqliteStore::new(db)));
    let record = second.load();
    assert!(second.has_persisted());
    assert_eq!(record.font_size, FontSize::ExtraLarge);
    assert_eq!(record.color_blind_mode, ColorBlindMode::Tritanopia);
    assert_eq!(record.speech_volume, 0.4);
    assert_eq!(&record, first.settings());
}

#[test]
fn test_malformed_persisted_record_falls_back_to_defaults() {
    let mem = Arc::new(MemoryStore::new());
    mem.set(SETTINGS_KEY, "{\"highContrast\":tru").expect("set failed");
    let mut store = PreferenceStore::new(mem);
    assert_eq!(store.load(), SettingsRecord::default());
}

#[test]
fn test_corrupted_record_still_counts_as_first_run() {
    let mem = Arc::new(MemoryStore::new());
    mem.set(SETTINGS_KEY, "{\"highContrast\":tru").expect("set failed");
    let mut store = PreferenceStore::new(mem);
    store.load();
    assert!(!store.has_persisted());
    assert!(store.apply_system_preferences(true, false));
    assert!(store.settings().reduced_motion);
}

#[test]
fn test_off_grid_speech_values_reload_exactly() {
    let (mem, mut store) = memory_store();
    store.set_speech_rate(1.2345678901234567);
    store.set_speech_volume(0.9859832263385391);
    let expected = store.settings().clone();

    let mut reloaded = PreferenceStore::new(mem);
    assert_eq!(reloaded.load(), expected);
    assert_eq!(reloaded.settings().speech_volume, 0.9859832263385391);
}

#[test]
fn test_out_of_domain_persisted_fields_keep_defaults() {
    let mem = Arc::new(MemoryStore::new());
    mem.set(
        SETTINGS_KEY,
        r#"{"highContrast":true,"cursorSize":"enormous","readingMask":"yes","speechVolume":-3}"#,
    )
    .expect("set failed");
    let mut store = PreferenceStore::new(mem);
    let record = store.load();
    assert!(record.high_contrast);
    assert_eq!(record.cursor_size, CursorSize::Normal);
    assert!(!record.reading_mask);
    assert_eq!(record.speech_volume, 0.0);
}

#[test]
fn test_quota_failure_keeps_previous_persisted_record() {
    let before = serde_json::to_string(&SettingsRecord::default()).expect("serialize failed");
    let mem = Arc::new(MemoryStore::with_quota(SETTINGS_KEY.len() + before.len()));
    mem.set(SETTINGS_KEY, &before).expect("seed failed");

    let mut store = PreferenceStore::new(mem.clone());
    store.load();
    // "extra-relaxed" is longer than "normal", so the rewrite no longer fits.
    store
        .set_choice(SettingField::LineSpacing, "extra-relaxed")
        .expect("in-memory change still applies");
    assert_eq!(store.settings().line_spacing.as_str(), "extra-relaxed");
    assert_eq!(saved(&mem), Some(before));
}

// ─── Setters ───

#[test]
fn test_invalid_font_size_changes_nothing() {
    let (mem, mut store) = memory_store();
    store.set_font_size("large").expect("set failed");
    let writes = mem.write_count();
    let err = store.set_font_size("LARGE").unwrap_err();
    assert!(matches!(err, PreferenceError::InvalidValue { .. }));
    assert_eq!(store.settings().font_size, FontSize::Large);
    assert_eq!(mem.write_count(), writes);
}

#[test]
fn test_toggle_rejects_non_flags() {
    let (mem, mut store) = memory_store();
    assert_eq!(
        store.toggle_flag(SettingField::SpeechRate),
        Err(PreferenceError::NotAFlag("speechRate".to_string()))
    );
    assert_eq!(mem.write_count(), 0);
}

#[test]
fn test_set_choice_rejects_unknown_tokens() {
    let (_, mut store) = memory_store();
    assert!(store.set_choice(SettingField::ColorBlindMode, "sepia").is_err());
    assert_eq!(store.settings().color_blind_mode, ColorBlindMode::None);
}

#[test]
fn test_speech_rate_and_volume_are_clamped() {
    let (_, mut store) = memory_store();
    assert_eq!(store.set_speech_rate(5.0), Some(2.0));
    assert_eq!(store.set_speech_rate(0.1), Some(0.5));
    assert_eq!(store.set_speech_volume(-1.0), Some(0.0));
    assert_eq!(store.set_speech_volume(3.0), Some(1.0));
    assert_eq!(store.settings().speech_rate, 0.5);
    assert_eq!(store.settings().speech_volume, 1.0);
}

#[test]
fn test_non_finite_speech_values_are_ignored() {
    let (mem, mut store) = memory_store();
    assert_eq!(store.set_speech_rate(f64::NAN), None);
    assert_eq!(store.set_speech_volume(f64::INFINITY), None);
    assert_eq!(store.settings().speech_rate, 1.0);
    assert_eq!(mem.write_count(), 0);
}

#[test]
fn test_reset_restores_and_persists_defaults() {
    let (mem, mut store) = memory_store();
    store.set_flag(SettingField::HideImages, true).expect("set failed");
    store.set_font_size("small").expect("set failed");
    store.reset();
    assert_eq!(store.settings(), &SettingsRecord::default());
    let persisted: SettingsRecord =
        serde_json::from_str(&saved(&mem).expect("nothing saved")).expect("invalid json");
    assert_eq!(persisted, SettingsRecord::default());
    assert_eq!(persisted.current_profile, CurrentProfile::Custom);
}
