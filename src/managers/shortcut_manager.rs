//! Shortcut Manager for ThinkUp.
//!
//! Global keyboard shortcuts for the accessibility subsystem. A binding fires only when the
//! Alt, Ctrl and Meta state of the event is exactly the chord's. Shift is compared for
//! letters and named keys; punctuation keys already encode it in the key value.

use serde::Deserialize;

use crate::types::errors::ShortcutError;

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutAction {
    TogglePanel,
    ToggleHighContrast,
    IncreaseFontSize,
    DecreaseFontSize,
    CloseOverlays,
    ScrollToTop,
    ScrollToBottom,
}

impl ShortcutAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutAction::TogglePanel => "toggle_panel",
            ShortcutAction::ToggleHighContrast => "toggle_high_contrast",
            ShortcutAction::IncreaseFontSize => "increase_font_size",
            ShortcutAction::DecreaseFontSize => "decrease_font_size",
            ShortcutAction::CloseOverlays => "close_overlays",
            ShortcutAction::ScrollToTop => "scroll_to_top",
            ShortcutAction::ScrollToBottom => "scroll_to_bottom",
        }
    }

    /// Hint shown in the panel's shortcut list.
    pub fn description(&self) -> &'static str {
        match self {
            ShortcutAction::TogglePanel => "Abrir panel",
            ShortcutAction::ToggleHighContrast => "Alto contraste",
            ShortcutAction::IncreaseFontSize => "Aumentar texto",
            ShortcutAction::DecreaseFontSize => "Disminuir texto",
            ShortcutAction::CloseOverlays => "Cerrar paneles",
            ShortcutAction::ScrollToTop => "Ir al inicio",
            ShortcutAction::ScrollToBottom => "Ir al final",
        }
    }
}

/// A `keydown` as reported by the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeyEvent {
    pub key: String,
    #[serde(rename = "altKey")]
    pub alt: bool,
    #[serde(rename = "ctrlKey")]
    pub ctrl: bool,
    #[serde(rename = "metaKey")]
    pub meta: bool,
    #[serde(rename = "shiftKey")]
    pub shift: bool,
}

impl KeyEvent {
    /// An event for `key` with no modifiers held.
    pub fn plain(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    pub fn alt(key: &str) -> Self {
        Self {
            alt: true,
            ..Self::plain(key)
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }
}

/// A parsed `Modifier+...+Key` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    /// Parses chords such as `"Alt+A"`, `"Ctrl+Home"`, `"Alt+Plus"` or `"Escape"`.
    pub fn parse(spec: &str) -> Result<Self, ShortcutError> {
        let invalid = || ShortcutError::InvalidChord(spec.to_string());
        let parts: Vec<&str> = spec.split('+').map(str::trim).collect();
        let (key, modifiers) = parts.split_last().ok_or_else(invalid)?;
        if key.is_empty() {
            return Err(invalid());
        }

        let mut chord = KeyChord {
            key: Self::normalize_key(key),
            alt: false,
            ctrl: false,
            meta: false,
            shift: false,
        };
        for modifier in modifiers {
            match modifier.to_ascii_lowercase().as_str() {
                "alt" => chord.alt = true,
                "ctrl" | "control" => chord.ctrl = true,
                "meta" | "cmd" => chord.meta = true,
                "shift" => chord.shift = true,
                _ => return Err(invalid()),
            }
        }
        if matches!(
            chord.key.to_ascii_lowercase().as_str(),
            "alt" | "ctrl" | "control" | "meta" | "shift"
        ) {
            return Err(invalid());
        }
        Ok(chord)
    }

    fn normalize_key(key: &str) -> String {
        match key {
            "Plus" => "+".to_string(),
            "Equal" => "=".to_string(),
            "Minus" => "-".to_string(),
            k if k.chars().count() == 1 => k.to_lowercase(),
            k => k.to_string(),
        }
    }

    fn compares_shift(&self) -> bool {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.is_alphanumeric(),
            _ => true,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.alt != event.alt || self.ctrl != event.ctrl || self.meta != event.meta {
            return false;
        }
        if self.compares_shift() && self.shift != event.shift {
            return false;
        }
        if self.key.chars().count() == 1 {
            self.key == event.key.to_lowercase()
        } else {
            self.key == event.key
        }
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (held, name) in [
            (self.ctrl, "Ctrl"),
            (self.alt, "Alt"),
            (self.meta, "Meta"),
            (self.shift, "Shift"),
        ] {
            if held {
                write!(f, "{}+", name)?;
            }
        }
        match self.key.as_str() {
            "+" => f.write_str("Plus"),
            "=" => f.write_str("Equal"),
            "-" => f.write_str("Minus"),
            k if k.chars().count() == 1 => f.write_str(&k.to_uppercase()),
            k => f.write_str(k),
        }
    }
}

const DEFAULT_BINDINGS: [(ShortcutAction, &str); 8] = [
    (ShortcutAction::TogglePanel, "Alt+A"),
    (ShortcutAction::ToggleHighContrast, "Alt+C"),
    (ShortcutAction::IncreaseFontSize, "Alt+Plus"),
    (ShortcutAction::IncreaseFontSize, "Alt+Equal"),
    (ShortcutAction::DecreaseFontSize, "Alt+Minus"),
    (ShortcutAction::CloseOverlays, "Escape"),
    (ShortcutAction::ScrollToTop, "Ctrl+Home"),
    (ShortcutAction::ScrollToBottom, "Ctrl+End"),
];

/// Trait defining shortcut lookup operations.
pub trait ShortcutManagerTrait {
    fn resolve(&self, event: &KeyEvent) -> Option<ShortcutAction>;
    fn get_shortcuts(&self, action: ShortcutAction) -> Vec<String>;
    fn list_shortcuts(&self) -> Vec<(ShortcutAction, String)>;
}

pub struct ShortcutManager {
    bindings: Vec<(ShortcutAction, KeyChord)>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let bindings = DEFAULT_BINDINGS
            .iter()
            .filter_map(|(action, spec)| KeyChord::parse(spec).ok().map(|c| (*action, c)))
            .collect();
        Self { bindings }
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn resolve(&self, event: &KeyEvent) -> Option<ShortcutAction> {
        self.bindings
            .iter()
            .find(|(_, chord)| chord.matches(event))
            .map(|(action, _)| *action)
    }

    fn get_shortcuts(&self, action: ShortcutAction) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, chord)| chord.to_string())
            .collect()
    }

    fn list_shortcuts(&self) -> Vec<(ShortcutAction, String)> {
        self.bindings
            .iter()
            .map(|(action, chord)| (*action, chord.to_string()))
            .collect()
    }
}
