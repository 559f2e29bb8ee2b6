use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::PreferenceError;

/// Inclusive bounds for the speech rate multiplier.
pub const SPEECH_RATE_RANGE: (f64, f64) = (0.5, 2.0);
/// Inclusive bounds for the speech volume.
pub const SPEECH_VOLUME_RANGE: (f64, f64) = (0.0, 1.0);

token_enum! {
    /// Base text size.
    FontSize, "fontSize" {
        Small => "small", "Pequeño",
        Normal => "normal", "Normal",
        Large => "large", "Grande",
        ExtraLarge => "extra-large", "Extra Grande",
    }
}

token_enum! {
    /// Color-vision simulation filter applied to the whole page.
    ColorBlindMode, "colorBlindMode" {
        None => "none", "Ninguno",
        Protanopia => "protanopia", "Protanopia",
        Deuteranopia => "deuteranopia", "Deuteranopia",
        Tritanopia => "tritanopia", "Tritanopia",
        Grayscale => "grayscale", "Escala de Grises",
        Inverted => "inverted", "Invertido",
    }
}

token_enum! {
    LineSpacing, "lineSpacing" {
        Compact => "compact", "Compacto",
        Normal => "normal", "Normal",
        Relaxed => "relaxed", "Relajado",
        ExtraRelaxed => "extra-relaxed", "Extra Relajado",
    }
}

token_enum! {
    LetterSpacing, "letterSpacing" {
        Compact => "compact", "Compacto",
        Normal => "normal", "Normal",
        Wide => "wide", "Ancho",
        ExtraWide => "extra-wide", "Extra Ancho",
    }
}

token_enum! {
    CursorSize, "cursorSize" {
        Normal => "normal", "Normal",
        Large => "large", "Grande",
        ExtraLarge => "extra-large", "Extra Grande",
    }
}

token_enum! {
    /// Which preset the record was last derived from. Informational only.
    CurrentProfile, "currentProfile" {
        Custom => "custom", "Personalizado",
        Dyslexia => "dyslexia", "Dislexia",
        LowVision => "low-vision", "Baja Visión",
        Motor => "motor", "Motor",
        Adhd => "adhd", "TDAH",
        Colorblind => "colorblind", "Daltonismo",
    }
}

token_enum! {
    /// Light or dark page palette. Independent of the accessibility record.
    ThemeMode, "theme" {
        Light => "light", "Claro",
        Dark => "dark", "Oscuro",
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Normal
    }
}

impl Default for ColorBlindMode {
    fn default() -> Self {
        ColorBlindMode::None
    }
}

impl Default for LineSpacing {
    fn default() -> Self {
        LineSpacing::Normal
    }
}

impl Default for LetterSpacing {
    fn default() -> Self {
        LetterSpacing::Normal
    }
}

impl Default for CursorSize {
    fn default() -> Self {
        CursorSize::Normal
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl Default for CurrentProfile {
    fn default() -> Self {
        CurrentProfile::Custom
    }
}

impl FontSize {
    /// One step larger, or `None` at the top of the scale.
    pub fn larger(&self) -> Option<FontSize> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    /// One step smaller, or `None` at the bottom of the scale.
    pub fn smaller(&self) -> Option<FontSize> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        idx.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based position on the scale, shown on the header quick control.
    pub fn indicator(&self) -> u8 {
        match self {
            FontSize::Small => 1,
            FontSize::Normal => 2,
            FontSize::Large => 3,
            FontSize::ExtraLarge => 4,
        }
    }
}

/// Shape of a settings field's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Flag,
    Choice,
    Number,
    Tag,
}

/// Names every field of [`SettingsRecord`] by its persisted (camelCase) key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingField {
    HighContrast,
    FontSize,
    FocusIndicator,
    ReducedMotion,
    KeyboardNavigation,
    TextToSpeech,
    SpeechRate,
    SpeechVolume,
    ColorBlindMode,
    LineSpacing,
    LetterSpacing,
    CursorSize,
    ReadingMask,
    HighlightLinks,
    HideImages,
    SimplifiedMode,
    ReadingGuide,
    DyslexiaFont,
    CurrentProfile,
}

impl SettingField {
    pub const ALL: [SettingField; 19] = [
        SettingField::HighContrast,
        SettingField::FontSize,
        SettingField::FocusIndicator,
        SettingField::ReducedMotion,
        SettingField::KeyboardNavigation,
        SettingField::TextToSpeech,
        SettingField::SpeechRate,
        SettingField::SpeechVolume,
        SettingField::ColorBlindMode,
        SettingField::LineSpacing,
        SettingField::LetterSpacing,
        SettingField::CursorSize,
        SettingField::ReadingMask,
        SettingField::HighlightLinks,
        SettingField::HideImages,
        SettingField::SimplifiedMode,
        SettingField::ReadingGuide,
        SettingField::DyslexiaFont,
        SettingField::CurrentProfile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingField::HighContrast => "highContrast",
            SettingField::FontSize => "fontSize",
            SettingField::FocusIndicator => "focusIndicator",
            SettingField::ReducedMotion => "reducedMotion",
            SettingField::KeyboardNavigation => "keyboardNavigation",
            SettingField::TextToSpeech => "textToSpeech",
            SettingField::SpeechRate => "speechRate",
            SettingField::SpeechVolume => "speechVolume",
            SettingField::ColorBlindMode => "colorBlindMode",
            SettingField::LineSpacing => "lineSpacing",
            SettingField::LetterSpacing => "letterSpacing",
            SettingField::CursorSize => "cursorSize",
            SettingField::ReadingMask => "readingMask",
            SettingField::HighlightLinks => "highlightLinks",
            SettingField::HideImages => "hideImages",
            SettingField::SimplifiedMode => "simplifiedMode",
            SettingField::ReadingGuide => "readingGuide",
            SettingField::DyslexiaFont => "dyslexiaFont",
            SettingField::CurrentProfile => "currentProfile",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            SettingField::FontSize
            | SettingField::ColorBlindMode
            | SettingField::LineSpacing
            | SettingField::LetterSpacing
            | SettingField::CursorSize => FieldKind::Choice,
            SettingField::SpeechRate | SettingField::SpeechVolume => FieldKind::Number,
            SettingField::CurrentProfile => FieldKind::Tag,
            _ => FieldKind::Flag,
        }
    }

    /// Every accepted token for a choice or tag field; empty for flags and numbers.
    pub fn tokens(&self) -> Vec<&'static str> {
        match self {
            SettingField::FontSize => FontSize::ALL.iter().map(|v| v.as_str()).collect(),
            SettingField::ColorBlindMode => ColorBlindMode::ALL.iter().map(|v| v.as_str()).collect(),
            SettingField::LineSpacing => LineSpacing::ALL.iter().map(|v| v.as_str()).collect(),
            SettingField::LetterSpacing => LetterSpacing::ALL.iter().map(|v| v.as_str()).collect(),
            SettingField::CursorSize => CursorSize::ALL.iter().map(|v| v.as_str()).collect(),
            SettingField::CurrentProfile => CurrentProfile::ALL.iter().map(|v| v.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl FromStr for SettingField {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingField::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| PreferenceError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for SettingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamps a requested speech rate into range. Non-finite input yields `None`.
pub fn clamp_speech_rate(rate: f64) -> Option<f64> {
    rate.is_finite()
        .then(|| rate.clamp(SPEECH_RATE_RANGE.0, SPEECH_RATE_RANGE.1))
}

/// Clamps a requested speech volume into range. Non-finite input yields `None`.
pub fn clamp_speech_volume(volume: f64) -> Option<f64> {
    volume
        .is_finite()
        .then(|| volume.clamp(SPEECH_VOLUME_RANGE.0, SPEECH_VOLUME_RANGE.1))
}

/// The flat accessibility preference record, persisted as one JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    pub high_contrast: bool,
    pub font_size: FontSize,
    pub focus_indicator: bool,
    pub reduced_motion: bool,
    pub keyboard_navigation: bool,
    pub text_to_speech: bool,
    pub speech_rate: f64,
    pub speech_volume: f64,
    pub color_blind_mode: ColorBlindMode,
    pub line_spacing: LineSpacing,
    pub letter_spacing: LetterSpacing,
    pub cursor_size: CursorSize,
    pub reading_mask: bool,
    pub highlight_links: bool,
    pub hide_images: bool,
    pub simplified_mode: bool,
    pub reading_guide: bool,
    pub dyslexia_font: bool,
    pub current_profile: CurrentProfile,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            high_contrast: false,
            font_size: FontSize::Normal,
            focus_indicator: true,
            reduced_motion: false,
            keyboard_navigation: true,
            text_to_speech: false,
            speech_rate: 1.0,
            speech_volume: 1.0,
            color_blind_mode: ColorBlindMode::None,
            line_spacing: LineSpacing::Normal,
            letter_spacing: LetterSpacing::Normal,
            cursor_size: CursorSize::Normal,
            reading_mask: false,
            highlight_links: false,
            hide_images: false,
            simplified_mode: false,
            reading_guide: false,
            dyslexia_font: false,
            current_profile: CurrentProfile::Custom,
        }
    }
}

impl SettingsRecord {
    /// Reads a boolean field.
    pub fn flag(&self, field: SettingField) -> Result<bool, PreferenceError> {
        Ok(match field {
            SettingField::HighContrast => self.high_contrast,
            SettingField::FocusIndicator => self.focus_indicator,
            SettingField::ReducedMotion => self.reduced_motion,
            SettingField::KeyboardNavigation => self.keyboard_navigation,
            SettingField::TextToSpeech => self.text_to_speech,
            SettingField::ReadingMask => self.reading_mask,
            SettingField::HighlightLinks => self.highlight_links,
            SettingField::HideImages => self.hide_images,
            SettingField::SimplifiedMode => self.simplified_mode,
            SettingField::ReadingGuide => self.reading_guide,
            SettingField::DyslexiaFont => self.dyslexia_font,
            other => return Err(PreferenceError::NotAFlag(other.as_str().to_string())),
        })
    }

    pub(crate) fn flag_mut(&mut self, field: SettingField) -> Result<&mut bool, PreferenceError> {
        Ok(match field {
            SettingField::HighContrast => &mut self.high_contrast,
            SettingField::FocusIndicator => &mut self.focus_indicator,
            SettingField::ReducedMotion => &mut self.reduced_motion,
            SettingField::KeyboardNavigation => &mut self.keyboard_navigation,
            SettingField::TextToSpeech => &mut self.text_to_speech,
            SettingField::ReadingMask => &mut self.reading_mask,
            SettingField::HighlightLinks => &mut self.highlight_links,
            SettingField::HideImages => &mut self.hide_images,
            SettingField::SimplifiedMode => &mut self.simplified_mode,
            SettingField::ReadingGuide => &mut self.reading_guide,
            SettingField::DyslexiaFont => &mut self.dyslexia_font,
            other => return Err(PreferenceError::NotAFlag(other.as_str().to_string())),
        })
    }

    /// Current value of any field, spelled the way the presentation layer and the
    /// marker table spell it.
    pub fn token(&self, field: SettingField) -> String {
        match field {
            SettingField::FontSize => self.font_size.as_str().to_string(),
            SettingField::ColorBlindMode => self.color_blind_mode.as_str().to_string(),
            SettingField::LineSpacing => self.line_spacing.as_str().to_string(),
            SettingField::LetterSpacing => self.letter_spacing.as_str().to_string(),
            SettingField::CursorSize => self.cursor_size.as_str().to_string(),
            SettingField::CurrentProfile => self.current_profile.as_str().to_string(),
            SettingField::SpeechRate => format!("{:.1}", self.speech_rate),
            SettingField::SpeechVolume => format!("{:.1}", self.speech_volume),
            flag => self.flag(flag).map(|b| b.to_string()).unwrap_or_default(),
        }
    }

    /// Sets any field from its token spelling. Out-of-domain tokens leave the record untouched.
    pub(crate) fn set_token(&mut self, field: SettingField, value: &str) -> Result<(), PreferenceError> {
        let invalid = || PreferenceError::InvalidValue {
            field: field.as_str().to_string(),
            value: value.to_string(),
        };
        match field {
            SettingField::FontSize => self.font_size = value.parse()?,
            SettingField::ColorBlindMode => self.color_blind_mode = value.parse()?,
            SettingField::LineSpacing => self.line_spacing = value.parse()?,
            SettingField::LetterSpacing => self.letter_spacing = value.parse()?,
            SettingField::CursorSize => self.cursor_size = value.parse()?,
            SettingField::CurrentProfile => self.current_profile = value.parse()?,
            SettingField::SpeechRate => {
                let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
                self.speech_rate = clamp_speech_rate(parsed).ok_or_else(invalid)?;
            }
            SettingField::SpeechVolume => {
                let parsed: f64 = value.trim().parse().map_err(|_| invalid())?;
                self.speech_volume = clamp_speech_volume(parsed).ok_or_else(invalid)?;
            }
            flag => {
                let parsed = match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid()),
                };
                *self.flag_mut(flag)? = parsed;
            }
        }
        Ok(())
    }

    /// Pulls numeric fields back into range (used after loading persisted data).
    pub fn sanitize(&mut self) {
        self.speech_rate = clamp_speech_rate(self.speech_rate).unwrap_or(1.0);
        self.speech_volume = clamp_speech_volume(self.speech_volume).unwrap_or(1.0);
    }
}

/// A partial record: only the `Some` fields are written when merged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_indicator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard_navigation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_blind_mode: Option<ColorBlindMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_spacing: Option<LineSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_size: Option<CursorSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_mask: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dyslexia_font: Option<bool>,
}

impl SettingsPatch {
    pub const EMPTY: SettingsPatch = SettingsPatch {
        high_contrast: None,
        font_size: None,
        focus_indicator: None,
        reduced_motion: None,
        keyboard_navigation: None,
        color_blind_mode: None,
        line_spacing: None,
        letter_spacing: None,
        cursor_size: None,
        reading_mask: None,
        highlight_links: None,
        hide_images: None,
        simplified_mode: None,
        dyslexia_font: None,
    };

    /// Shallow merge into `record`; fields left `None` are untouched.
    pub fn apply_to(&self, record: &mut SettingsRecord) {
        fn put<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        put(&mut record.high_contrast, self.high_contrast);
        put(&mut record.font_size, self.font_size);
        put(&mut record.focus_indicator, self.focus_indicator);
        put(&mut record.reduced_motion, self.reduced_motion);
        put(&mut record.keyboard_navigation, self.keyboard_navigation);
        put(&mut record.color_blind_mode, self.color_blind_mode);
        put(&mut record.line_spacing, self.line_spacing);
        put(&mut record.letter_spacing, self.letter_spacing);
        put(&mut record.cursor_size, self.cursor_size);
        put(&mut record.reading_mask, self.reading_mask);
        put(&mut record.highlight_links, self.highlight_links);
        put(&mut record.hide_images, self.hide_images);
        put(&mut record.simplified_mode, self.simplified_mode);
        put(&mut record.dyslexia_font, self.dyslexia_font);
    }

    /// The fields this patch writes.
    pub fn fields(&self) -> Vec<SettingField> {
        let present = [
            (SettingField::HighContrast, self.high_contrast.is_some()),
            (SettingField::FontSize, self.font_size.is_some()),
            (SettingField::FocusIndicator, self.focus_indicator.is_some()),
            (SettingField::ReducedMotion, self.reduced_motion.is_some()),
            (SettingField::KeyboardNavigation, self.keyboard_navigation.is_some()),
            (SettingField::ColorBlindMode, self.color_blind_mode.is_some()),
            (SettingField::LineSpacing, self.line_spacing.is_some()),
            (SettingField::LetterSpacing, self.letter_spacing.is_some()),
            (SettingField::CursorSize, self.cursor_size.is_some()),
            (SettingField::ReadingMask, self.reading_mask.is_some()),
            (SettingField::HighlightLinks, self.highlight_links.is_some()),
            (SettingField::HideImages, self.hide_images.is_some()),
            (SettingField::SimplifiedMode, self.simplified_mode.is_some()),
            (SettingField::DyslexiaFont, self.dyslexia_font.is_some()),
        ];
        present.into_iter().filter(|(_, p)| *p).map(|(f, _)| f).collect()
    }
}
