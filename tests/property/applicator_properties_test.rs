//! Property-based tests for the preference applicator.
//!
//! These tests verify that projecting any settings record onto the document
//! is idempotent, leaves exactly one marker per multi-valued field and keeps
//! the overlays in step with their flags.

use std::sync::Arc;

use proptest::prelude::*;
use thinkup::services::preference_applicator::{self, MARKER_TABLE};
use thinkup::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use thinkup::services::storage::MemoryStore;
use thinkup::types::document::Document;
use thinkup::types::settings::{
    ColorBlindMode, CursorSize, FontSize, LetterSpacing, LineSpacing, SettingsRecord,
};

fn pick<T: Copy + std::fmt::Debug + 'static>(all: &'static [T]) -> impl Strategy<Value = T> {
    (0..all.len()).prop_map(move |i| all[i])
}

/// Strategy for generating records with every marker-producing field varied.
fn arb_record() -> impl Strategy<Value = SettingsRecord> {
    (
        (
            pick(FontSize::ALL),
            pick(ColorBlindMode::ALL),
            pick(LineSpacing::ALL),
            pick(LetterSpacing::ALL),
            pick(CursorSize::ALL),
        ),
        proptest::collection::vec(any::<bool>(), 11),
    )
        .prop_map(|((font, cb, line, letter, cursor), f)| SettingsRecord {
            high_contrast: f[0],
            font_size: font,
            focus_indicator: f[1],
            reduced_motion: f[2],
            keyboard_navigation: f[3],
            text_to_speech: f[4],
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
            ..SettingsRecord::default()
        })
}

/// Strategy for font size tokens outside the domain.
fn arb_bad_font_token() -> impl Strategy<Value = String> {
    "[a-z-]{1,12}".prop_filter("must not be a valid size", |s| {
        FontSize::ALL.iter().all(|size| size.as_str() != s)
    })
}

// **Property: Apply is idempotent and history-free**
//
// *For any* two records, applying the second to a document that already
// reflects the first SHALL leave the same markers as applying it to a fresh
// document, and applying it again SHALL change nothing.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn apply_is_idempotent_and_history_free(
        first in arb_record(),
        second in arb_record(),
    ) {
        let mut reused = Document::new();
        preference_applicator::apply(&mut reused, &first);
        preference_applicator::apply(&mut reused, &second);

        let mut fresh = Document::new();
        preference_applicator::apply(&mut fresh, &second);
        let once = fresh.take_patch();
        preference_applicator::apply(&mut fresh, &second);

        prop_assert_eq!(reused.take_patch(), once.clone());
        prop_assert_eq!(fresh.take_patch(), once);
    }

    #[test]
    fn at_most_one_marker_per_field(record in arb_record()) {
        let mut doc = Document::new();
        preference_applicator::apply(&mut doc, &record);

        for rule in MARKER_TABLE {
            let present = rule.domain().filter(|m| doc.has_marker(rule.target, m)).count();
            let expected = usize::from(rule.marker_for(&record.token(rule.field)).is_some());
            prop_assert_eq!(present, expected, "field {}", rule.field);
        }
    }

    #[test]
    fn overlays_follow_their_flags(record in arb_record(), y in 0.0f64..2000.0) {
        let mut doc = Document::new();
        preference_applicator::apply(&mut doc, &record);

        let expected = usize::from(record.reading_mask) + usize::from(record.reading_guide);
        prop_assert_eq!(doc.overlay_count(), expected);
        prop_assert_eq!(preference_applicator::track_pointer(&mut doc, &record, y), expected);
    }
}

// **Property: Rejected font sizes leave the page untouched**
//
// *For any* token outside the font size domain, the store SHALL refuse it and
// re-applying the unchanged record SHALL leave the markers as they were.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn invalid_font_token_changes_nothing(token in arb_bad_font_token()) {
        let mut store = PreferenceStore::new(Arc::new(MemoryStore::new()));
        store.load();
        let mut doc = Document::new();
        preference_applicator::apply(&mut doc, store.settings());
        let before = doc.take_patch();

        prop_assert!(store.set_font_size(&token).is_err());
        preference_applicator::apply(&mut doc, store.settings());
        prop_assert_eq!(doc.take_patch(), before);
    }
}
