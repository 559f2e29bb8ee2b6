//! Theme Engine: light/dark palette, persisted choice, and CSS variables.

use std::collections::BTreeMap;

use tracing::warn;

use crate::services::storage::SharedStore;
use crate::types::document::Document;
use crate::types::settings::ThemeMode;

/// Storage key of the selected theme name.
pub const THEME_KEY: &str = "theme";

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn load(&mut self) -> ThemeMode;
    fn set_theme(&mut self, doc: &mut Document, mode: ThemeMode);
    fn toggle(&mut self, doc: &mut Document) -> ThemeMode;
    fn get_theme(&self) -> ThemeMode;
    fn get_css_variables(&self) -> BTreeMap<String, String>;
}

struct Palette {
    bg_primary: &'static str,
    bg_secondary: &'static str,
    text_primary: &'static str,
    text_secondary: &'static str,
    border: &'static str,
    accent: &'static str,
    accent_hover: &'static str,
    card_shadow: &'static str,
}

const LIGHT: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f7fb",
    text_primary: "#1f2937",
    text_secondary: "#4b5563",
    border: "#e5e7eb",
    accent: "#5b4bdb",
    accent_hover: "#4536b8",
    card_shadow: "0 4px 16px rgba(15, 23, 42, 0.08)",
};

const DARK: Palette = Palette {
    bg_primary: "#0f172a",
    bg_secondary: "#1e293b",
    text_primary: "#e2e8f0",
    text_secondary: "#94a3b8",
    border: "#334155",
    accent: "#8b7cf6",
    accent_hover: "#a99ef9",
    card_shadow: "0 4px 16px rgba(0, 0, 0, 0.45)",
};

/// The theme engine implementation.
pub struct ThemeEngine {
    storage: SharedStore,
    current_theme: ThemeMode,
}

impl ThemeEngine {
    pub fn new(storage: SharedStore) -> Self {
        Self {
            storage,
            current_theme: ThemeMode::default(),
        }
    }

    /// Writes `data-theme` on the root element.
    pub fn apply(&self, doc: &mut Document) {
        doc.set_root_attribute("data-theme", self.current_theme.as_str());
    }

    /// Icon name for the header toggle: it offers the opposite theme.
    pub fn toggle_icon(&self) -> &'static str {
        match self.current_theme {
            ThemeMode::Light => "dark_mode",
            ThemeMode::Dark => "light_mode",
        }
    }

    /// The palette as a `:root { ... }` stylesheet block.
    pub fn css_block(&self) -> String {
        let body: String = self
            .get_css_variables()
            .iter()
            .map(|(name, value)| format!("  {}: {};\n", name, value))
            .collect();
        format!(":root {{\n{}}}\n", body)
    }
}

impl ThemeEngineTrait for ThemeEngine {
    /// Reads the saved theme. Missing, unreadable or unknown values fall back to light.
    fn load(&mut self) -> ThemeMode {
        self.current_theme = match self.storage.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                warn!(theme = %raw, "Unknown saved theme, using light");
                ThemeMode::Light
            }),
            Ok(None) => ThemeMode::Light,
            Err(e) => {
                warn!(error = %e, "Could not read saved theme");
                ThemeMode::Light
            }
        };
        self.current_theme
    }

    fn set_theme(&mut self, doc: &mut Document, mode: ThemeMode) {
        self.current_theme = mode;
        self.apply(doc);
        if let Err(e) = self.storage.set(THEME_KEY, mode.as_str()) {
            warn!(error = %e, "Could not save theme");
        }
    }

    fn toggle(&mut self, doc: &mut Document) -> ThemeMode {
        let next = match self.current_theme {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_theme(doc, next);
        next
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn get_css_variables(&self) -> BTreeMap<String, String> {
        let p = match self.current_theme {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        };
        let mut vars = BTreeMap::new();
        vars.insert("--bg-primary".into(), p.bg_primary.into());
        vars.insert("--bg-secondary".into(), p.bg_secondary.into());
        vars.insert("--text-primary".into(), p.text_primary.into());
        vars.insert("--text-secondary".into(), p.text_secondary.into());
        vars.insert("--border-color".into(), p.border.into());
        vars.insert("--accent-color".into(), p.accent.into());
        vars.insert("--accent-hover".into(), p.accent_hover.into());
        vars.insert("--card-shadow".into(), p.card_shadow.into());
        vars.insert("--transition-normal".into(), "300ms".into());
        vars
    }
}
