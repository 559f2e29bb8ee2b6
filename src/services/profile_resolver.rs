//! Profile Resolver: named presets as partial settings records.

use tracing::{debug, warn};

use crate::services::preference_store::PreferenceStore;
use crate::types::profile::ProfileName;
use crate::types::settings::{
    ColorBlindMode, CursorSize, FontSize, LetterSpacing, LineSpacing, SettingsPatch,
};

const DYSLEXIA: SettingsPatch = SettingsPatch {
    font_size: Some(FontSize::Large),
    line_spacing: Some(LineSpacing::ExtraRelaxed),
    letter_spacing: Some(LetterSpacing::Wide),
    dyslexia_font: Some(true),
    color_blind_mode: Some(ColorBlindMode::None),
    reduced_motion: Some(true),
    ..SettingsPatch::EMPTY
};

const LOW_VISION: SettingsPatch = SettingsPatch {
    font_size: Some(FontSize::ExtraLarge),
    high_contrast: Some(true),
    cursor_size: Some(CursorSize::ExtraLarge),
    line_spacing: Some(LineSpacing::Relaxed),
    highlight_links: Some(true),
    color_blind_mode: Some(ColorBlindMode::None),
    ..SettingsPatch::EMPTY
};

const MOTOR: SettingsPatch = SettingsPatch {
    cursor_size: Some(CursorSize::ExtraLarge),
    focus_indicator: Some(true),
    keyboard_navigation: Some(true),
    reduced_motion: Some(true),
    simplified_mode: Some(true),
    ..SettingsPatch::EMPTY
};

const ADHD: SettingsPatch = SettingsPatch {
    reading_mask: Some(true),
    reduced_motion: Some(true),
    simplified_mode: Some(true),
    hide_images: Some(false),
    font_size: Some(FontSize::Normal),
    ..SettingsPatch::EMPTY
};

const COLORBLIND: SettingsPatch = SettingsPatch {
    color_blind_mode: Some(ColorBlindMode::Deuteranopia),
    highlight_links: Some(true),
    high_contrast: Some(false),
    ..SettingsPatch::EMPTY
};

/// Every profile with its overlay, in panel order.
pub static PROFILE_TABLE: [(ProfileName, SettingsPatch); 5] = [
    (ProfileName::Dyslexia, DYSLEXIA),
    (ProfileName::LowVision, LOW_VISION),
    (ProfileName::Motor, MOTOR),
    (ProfileName::Adhd, ADHD),
    (ProfileName::Colorblind, COLORBLIND),
];

/// Looks up the overlay for a profile name. Unknown names resolve to `None`.
pub fn resolve(name: &str) -> Option<(ProfileName, &'static SettingsPatch)> {
    PROFILE_TABLE
        .iter()
        .find(|(profile, _)| profile.as_str() == name)
        .map(|(profile, patch)| (*profile, patch))
}

/// Merges the named profile into the live record, tags it, and persists.
///
/// Returns the resolved profile, or `None` when the name is unknown and nothing changed.
pub fn apply_profile(store: &mut PreferenceStore, name: &str) -> Option<ProfileName> {
    let Some((profile, patch)) = resolve(name) else {
        warn!(profile = name, "Unknown accessibility profile");
        return None;
    };
    store.apply_patch(patch, profile.into());
    debug!(profile = name, fields = patch.fields().len(), "Profile applied");
    Some(profile)
}
