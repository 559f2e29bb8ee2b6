use serde::{Deserialize, Serialize};

use super::profile::ProfileName;
use super::settings::SettingField;

/// Panel sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelSection {
    Profiles,
    Speech,
    Display,
    Spacing,
    Navigation,
    Content,
    Reset,
}

impl PanelSection {
    pub fn title(&self) -> &'static str {
        match self {
            PanelSection::Profiles => "Perfiles Rápidos",
            PanelSection::Speech => "Lector de Texto",
            PanelSection::Display => "Visualización",
            PanelSection::Spacing => "Espaciado",
            PanelSection::Navigation => "Navegación",
            PanelSection::Content => "Contenido",
            PanelSection::Reset => "Restablecer",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PanelSection::Profiles => "person",
            PanelSection::Speech => "record_voice_over",
            PanelSection::Display => "visibility",
            PanelSection::Spacing => "format_line_spacing",
            PanelSection::Navigation => "mouse",
            PanelSection::Content => "auto_awesome",
            PanelSection::Reset => "restore",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Displayed state of a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlKind {
    Toggle {
        checked: bool,
    },
    Select {
        options: Vec<SelectOption>,
        selected: String,
    },
    Range {
        min: f64,
        max: f64,
        step: f64,
        value: f64,
        display: String,
    },
    /// Decrease / label / increase triple.
    Stepper {
        display: String,
    },
    ProfileButton {
        profile: ProfileName,
    },
    Button,
}

/// What a control's change event triggers. Each control maps to exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    ToggleFlag(SettingField),
    SetChoice(SettingField, String),
    SetSpeechRate(f64),
    SetSpeechVolume(f64),
    IncreaseFontSize,
    DecreaseFontSize,
    LoadProfile(String),
    Reset,
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelControl {
    pub id: &'static str,
    pub label: &'static str,
    pub section: PanelSection,
    pub kind: ControlKind,
}

/// Raw input from a panel control, as reported by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "kebab-case")]
pub enum ControlInput {
    /// Checkbox change or button press.
    Activate,
    /// New `<select>` value.
    Select(String),
    /// New range slider value.
    Range(f64),
    Increase,
    Decrease,
}
