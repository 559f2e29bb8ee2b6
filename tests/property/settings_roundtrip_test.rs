//! Property-based tests for accessibility settings persistence.
//!
//! These tests verify that any valid settings record survives a save/load
//! cycle through the key-value store unchanged, and that the speech
//! setters always keep rate and volume inside their ranges.

use std::sync::Arc;

use proptest::prelude::*;
use thinkup::services::preference_store::{PreferenceStore, PreferenceStoreTrait, SETTINGS_KEY};
use thinkup::services::storage::{KeyValueStore, MemoryStore};
use thinkup::types::settings::{
    ColorBlindMode, CurrentProfile, CursorSize, FontSize, LetterSpacing, LineSpacing,
    SettingField, SettingsRecord, SPEECH_RATE_RANGE, SPEECH_VOLUME_RANGE,
};

fn pick<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = T> {
    (0..all.len()).prop_map(move |i| all[i])
}

/// Strategy for generating any in-domain settings record.
fn arb_record() -> impl Strategy<Value = SettingsRecord> {
    let choices = (
        pick(FontSize::ALL),
        pick(ColorBlindMode::ALL),
        pick(LineSpacing::ALL),
        pick(LetterSpacing::ALL),
        pick(CursorSize::ALL),
        pick(CurrentProfile::ALL),
        SPEECH_RATE_RANGE.0..=SPEECH_RATE_RANGE.1,
        SPEECH_VOLUME_RANGE.0..=SPEECH_VOLUME_RANGE.1,
    );
    let flags = proptest::collection::vec(any::<bool>(), 11);
    (choices, flags).prop_map(|((font, cb, line, letter, cursor, profile, rate, volume), f)| {
        SettingsRecord {
            high_contrast: f[0],
            font_size: font,
            focus_indicator: f[1],
            reduced_motion: f[2],
            keyboard_navigation: f[3],
            text_to_speech: f[4],
            speech_rate: rate,
            speech_volume: volume,
            color_blind_mode: cb,
            line_spacing: line,
            letter_spacing: letter,
            cursor_size: cursor,
            reading_mask: f[5],
            highlight_links: f[6],
            hide_images: f[7],
            simplified_mode: f[8],
            reading_guide: f[9],
            dyslexia_font: f[10],
            current_profile: profile,
        }
    })
}

// **Property: Settings persist-then-load round-trip**
//
// *For any* valid settings record, writing it to storage and loading it
// through a fresh preference store SHALL yield an equal record.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn settings_persist_then_load_roundtrip(record in arb_record()) {
        let storage = Arc::new(MemoryStore::new());
        let json = serde_json::to_string(&record).expect("record should serialize");
        storage.set(SETTINGS_KEY, &json).expect("unbounded store accepts the write");

        let mut store = PreferenceStore::new(storage);
        let loaded = store.load();
        prop_assert!(store.has_persisted());
        prop_assert_eq!(loaded, record);
    }

    #[test]
    fn setter_changes_survive_reload(record in arb_record()) {
        let storage = Arc::new(MemoryStore::new());
        let mut store = PreferenceStore::new(storage.clone());
        store.load();

        store.set_font_size(record.font_size.as_str()).expect("font token is in domain");
        store
            .set_choice(SettingField::LineSpacing, record.line_spacing.as_str())
            .expect("line spacing token is in domain");
        store
            .set_flag(SettingField::HideImages, record.hide_images)
            .expect("hideImages is a flag");
        store.set_speech_rate(record.speech_rate);
        store.set_speech_volume(record.speech_volume);

        let expected = store.settings().clone();
        let mut reloaded = PreferenceStore::new(storage);
        prop_assert_eq!(reloaded.load(), expected);
    }
}

// **Property: Speech values stay in range**
//
// *For any* finite input, the stored rate and volume SHALL lie inside their
// ranges and equal the clamped input.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn speech_setters_clamp_any_finite_input(
        rate in -1.0e6f64..1.0e6,
        volume in -1.0e6f64..1.0e6,
    ) {
        let mut store = PreferenceStore::new(Arc::new(MemoryStore::new()));
        store.load();

        let stored_rate = store.set_speech_rate(rate).expect("finite rate is accepted");
        let stored_volume = store.set_speech_volume(volume).expect("finite volume is accepted");

        prop_assert!(stored_rate >= SPEECH_RATE_RANGE.0 && stored_rate <= SPEECH_RATE_RANGE.1);
        prop_assert!(stored_volume >= SPEECH_VOLUME_RANGE.0 && stored_volume <= SPEECH_VOLUME_RANGE.1);
        prop_assert_eq!(stored_rate, rate.clamp(SPEECH_RATE_RANGE.0, SPEECH_RATE_RANGE.1));
        prop_assert_eq!(store.settings().speech_volume, stored_volume);
    }
}
