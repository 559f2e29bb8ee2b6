//! Panel Presenter for ThinkUp.
//!
//! Builds the accessibility panel from the live Settings Record and routes each control's
//! input to exactly one accessibility mutator. The panel markup is created lazily the first
//! time it is opened; afterwards only control states travel to the page.

use tracing::{debug, warn};

use crate::services::accessibility_manager::{AccessibilityManager, Confirm};
use crate::types::document::{Document, Politeness};
use crate::types::panel::{
    ControlInput, ControlKind, PanelAction, PanelControl, PanelSection, SelectOption,
};
use crate::types::profile::ProfileName;
use crate::types::settings::{
    ColorBlindMode, CursorSize, LetterSpacing, LineSpacing, SettingField, SettingsRecord,
    SPEECH_RATE_RANGE, SPEECH_VOLUME_RANGE,
};
use crate::views;

/// Element id of the panel container.
pub const PANEL_ID: &str = "accessibility-panel";

/// What a control is wired to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Binding {
    Flag(SettingField),
    Choice(SettingField),
    SpeechRate,
    SpeechVolume,
    FontSize,
    Profile(ProfileName),
    Reset,
    Close,
}

struct ControlEntry {
    id: &'static str,
    label: &'static str,
    section: PanelSection,
    binding: Binding,
}

const fn entry(id: &'static str, label: &'static str, section: PanelSection, binding: Binding) -> ControlEntry {
    ControlEntry { id, label, section, binding }
}

/// Every panel control, in display order.
static CONTROL_TABLE: &[ControlEntry] = &[
    entry("profile-dyslexia", "Dislexia", PanelSection::Profiles, Binding::Profile(ProfileName::Dyslexia)),
    entry("profile-low-vision", "Baja Visión", PanelSection::Profiles, Binding::Profile(ProfileName::LowVision)),
    entry("profile-motor", "Motor", PanelSection::Profiles, Binding::Profile(ProfileName::Motor)),
    entry("profile-adhd", "TDAH", PanelSection::Profiles, Binding::Profile(ProfileName::Adhd)),
    entry("profile-colorblind", "Daltonismo", PanelSection::Profiles, Binding::Profile(ProfileName::Colorblind)),
    entry("toggle-tts", "Activar Lector", PanelSection::Speech, Binding::Flag(SettingField::TextToSpeech)),
    entry("speech-rate", "Velocidad", PanelSection::Speech, Binding::SpeechRate),
    entry("speech-volume", "Volumen", PanelSection::Speech, Binding::SpeechVolume),
    entry("toggle-contrast", "Alto Contraste", PanelSection::Display, Binding::Flag(SettingField::HighContrast)),
    entry("font-size", "Tamaño de Texto", PanelSection::Display, Binding::FontSize),
    entry("colorblind-mode", "Modo Daltonismo", PanelSection::Display, Binding::Choice(SettingField::ColorBlindMode)),
    entry("line-spacing", "Espaciado de Líneas", PanelSection::Spacing, Binding::Choice(SettingField::LineSpacing)),
    entry("letter-spacing", "Espaciado de Letras", PanelSection::Spacing, Binding::Choice(SettingField::LetterSpacing)),
    entry("toggle-dyslexia-font", "Fuente para Dislexia", PanelSection::Spacing, Binding::Flag(SettingField::DyslexiaFont)),
    entry("cursor-size", "Tamaño de Cursor", PanelSection::Navigation, Binding::Choice(SettingField::CursorSize)),
    entry("toggle-reading-mask", "Máscara de Lectura", PanelSection::Navigation, Binding::Flag(SettingField::ReadingMask)),
    entry("toggle-reading-guide", "Guía de Lectura", PanelSection::Navigation, Binding::Flag(SettingField::ReadingGuide)),
    entry("toggle-highlight-links", "Resaltar Enlaces", PanelSection::Navigation, Binding::Flag(SettingField::HighlightLinks)),
    entry("toggle-focus-indicator", "Indicador de Foco", PanelSection::Navigation, Binding::Flag(SettingField::FocusIndicator)),
    entry("toggle-keyboard-nav", "Navegación por Teclado", PanelSection::Navigation, Binding::Flag(SettingField::KeyboardNavigation)),
    entry("toggle-simplified", "Modo Simplificado", PanelSection::Content, Binding::Flag(SettingField::SimplifiedMode)),
    entry("toggle-hide-images", "Ocultar Imágenes", PanelSection::Content, Binding::Flag(SettingField::HideImages)),
    entry("toggle-motion", "Reducir Movimiento", PanelSection::Content, Binding::Flag(SettingField::ReducedMotion)),
    entry("reset-accessibility", "Restablecer Todo", PanelSection::Reset, Binding::Reset),
    entry("panel-close", "Cerrar panel de accesibilidad", PanelSection::Reset, Binding::Close),
];

fn find_entry(id: &str) -> Option<&'static ControlEntry> {
    CONTROL_TABLE.iter().find(|s| s.id == id)
}

fn options_of<T>(all: &[T], token: fn(&T) -> &'static str, label: fn(&T) -> &'static str) -> Vec<SelectOption> {
    all.iter()
        .map(|v| SelectOption {
            value: token(v),
            label: label(v),
        })
        .collect()
}

fn choice_options(field: SettingField) -> Vec<SelectOption> {
    match field {
        SettingField::ColorBlindMode => options_of(ColorBlindMode::ALL, ColorBlindMode::as_str, ColorBlindMode::label),
        SettingField::LineSpacing => options_of(LineSpacing::ALL, LineSpacing::as_str, LineSpacing::label),
        SettingField::LetterSpacing => options_of(LetterSpacing::ALL, LetterSpacing::as_str, LetterSpacing::label),
        SettingField::CursorSize => options_of(CursorSize::ALL, CursorSize::as_str, CursorSize::label),
        _ => Vec::new(),
    }
}

fn rate_display(rate: f64) -> String {
    format!("{:.1}", rate)
}

fn volume_display(volume: f64) -> String {
    format!("{}%", (volume * 100.0).round() as i64)
}

/// Displayed state of one control for `record`.
fn control_kind(binding: Binding, record: &SettingsRecord) -> ControlKind {
    match binding {
        Binding::Flag(field) => ControlKind::Toggle {
            checked: record.flag(field).unwrap_or(false),
        },
        Binding::Choice(field) => ControlKind::Select {
            options: choice_options(field),
            selected: record.token(field),
        },
        Binding::SpeechRate => ControlKind::Range {
            min: SPEECH_RATE_RANGE.0,
            max: SPEECH_RATE_RANGE.1,
            step: 0.1,
            value: record.speech_rate,
            display: rate_display(record.speech_rate),
        },
        Binding::SpeechVolume => ControlKind::Range {
            min: SPEECH_VOLUME_RANGE.0,
            max: SPEECH_VOLUME_RANGE.1,
            step: 0.1,
            value: record.speech_volume,
            display: volume_display(record.speech_volume),
        },
        Binding::FontSize => ControlKind::Stepper {
            display: record.font_size.label().to_string(),
        },
        Binding::Profile(profile) => ControlKind::ProfileButton { profile },
        Binding::Reset | Binding::Close => ControlKind::Button,
    }
}

/// One control per settings field and profile, reflecting `record`.
pub fn build_controls(record: &SettingsRecord) -> Vec<PanelControl> {
    CONTROL_TABLE
        .iter()
        .map(|s| PanelControl {
            id: s.id,
            label: s.label,
            section: s.section,
            kind: control_kind(s.binding, record),
        })
        .collect()
}

/// The single action a control input maps to. Inputs that do not fit the control are refused.
pub fn action_for(control_id: &str, input: &ControlInput) -> Option<PanelAction> {
    let entry = find_entry(control_id)?;
    let action = match (entry.binding, input) {
        (Binding::Flag(field), ControlInput::Activate) => PanelAction::ToggleFlag(field),
        (Binding::Choice(field), ControlInput::Select(token)) => {
            PanelAction::SetChoice(field, token.clone())
        }
        (Binding::SpeechRate, ControlInput::Range(v)) => PanelAction::SetSpeechRate(*v),
        (Binding::SpeechVolume, ControlInput::Range(v)) => PanelAction::SetSpeechVolume(*v),
        (Binding::FontSize, ControlInput::Increase) => PanelAction::IncreaseFontSize,
        (Binding::FontSize, ControlInput::Decrease) => PanelAction::DecreaseFontSize,
        (Binding::Profile(p), ControlInput::Activate) => PanelAction::LoadProfile(p.as_str().to_string()),
        (Binding::Reset, ControlInput::Activate) => PanelAction::Reset,
        (Binding::Close, ControlInput::Activate) => PanelAction::Close,
        _ => return None,
    };
    Some(action)
}

/// Trait defining the panel presenter interface.
pub trait PanelPresenterTrait {
    fn toggle(&mut self, a11y: &AccessibilityManager, doc: &mut Document) -> bool;
    fn open(&mut self, a11y: &AccessibilityManager, doc: &mut Document);
    fn close(&mut self, doc: &mut Document) -> bool;
    fn handle_input(
        &mut self,
        a11y: &mut AccessibilityManager,
        doc: &mut Document,
        control_id: &str,
        input: ControlInput,
        confirm: &dyn Confirm,
    ) -> Option<PanelAction>;
    fn sync(&mut self, record: &SettingsRecord, doc: &mut Document);
    fn controls(&self) -> &[PanelControl];
}

pub struct PanelPresenter {
    built: bool,
    open: bool,
    controls: Vec<PanelControl>,
    shortcut_hints: Vec<(String, &'static str)>,
}

impl PanelPresenter {
    /// `shortcut_hints` are `(chord, description)` pairs listed at the bottom of the panel.
    pub fn new(shortcut_hints: Vec<(String, &'static str)>) -> Self {
        Self {
            built: false,
            open: false,
            controls: Vec::new(),
            shortcut_hints,
        }
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn build(&mut self, record: &SettingsRecord, doc: &mut Document) {
        self.controls = build_controls(record);
        doc.insert_region(PANEL_ID);
        let html = views::panel::render(&self.controls, &self.shortcut_hints);
        if let Err(e) = doc.render_region(PANEL_ID, html) {
            warn!(error = %e, "Could not render accessibility panel");
            return;
        }
        doc.set_element_attribute(PANEL_ID, "aria-hidden", "true");
        self.built = true;
        self.sync(record, doc);
        debug!(controls = self.controls.len(), "Accessibility panel built");
    }

    fn set_open(&mut self, doc: &mut Document, open: bool) {
        self.open = open;
        doc.set_element_attribute(PANEL_ID, "aria-hidden", if open { "false" } else { "true" });
        doc.set_element_class(PANEL_ID, "open", open);
        let message = if open {
            "Panel de accesibilidad abierto"
        } else {
            "Panel de accesibilidad cerrado"
        };
        doc.announce(message, Politeness::Polite);
    }
}

impl PanelPresenterTrait for PanelPresenter {
    /// Opens the panel, building it first if needed, or closes it. Returns whether it is open.
    fn toggle(&mut self, a11y: &AccessibilityManager, doc: &mut Document) -> bool {
        if self.open {
            self.close(doc);
        } else {
            self.open(a11y, doc);
        }
        self.open
    }

    fn open(&mut self, a11y: &AccessibilityManager, doc: &mut Document) {
        if !self.built {
            self.build(a11y.settings(), doc);
        }
        if self.built {
            self.set_open(doc, true);
        }
    }

    /// Returns whether the panel was open.
    fn close(&mut self, doc: &mut Document) -> bool {
        if !self.open {
            return false;
        }
        self.set_open(doc, false);
        true
    }

    fn handle_input(
        &mut self,
        a11y: &mut AccessibilityManager,
        doc: &mut Document,
        control_id: &str,
        input: ControlInput,
        confirm: &dyn Confirm,
    ) -> Option<PanelAction> {
        let Some(action) = action_for(control_id, &input) else {
            warn!(control = %control_id, ?input, "Input does not match any panel control");
            return None;
        };

        match &action {
            PanelAction::ToggleFlag(field) => {
                a11y.toggle(doc, *field);
            }
            PanelAction::SetChoice(field, token) => {
                a11y.set_choice(doc, *field, token);
            }
            PanelAction::SetSpeechRate(rate) => {
                a11y.set_speech_rate(*rate);
            }
            PanelAction::SetSpeechVolume(volume) => {
                a11y.set_speech_volume(*volume);
            }
            PanelAction::IncreaseFontSize => {
                a11y.increase_font_size(doc);
            }
            PanelAction::DecreaseFontSize => {
                a11y.decrease_font_size(doc);
            }
            PanelAction::LoadProfile(name) => {
                a11y.load_profile(doc, name);
            }
            PanelAction::Reset => {
                if a11y.reset(doc, confirm) {
                    self.sync(a11y.settings(), doc);
                    self.close(doc);
                    self.open(a11y, doc);
                }
            }
            PanelAction::Close => {
                self.close(doc);
            }
        }

        self.sync(a11y.settings(), doc);
        Some(action)
    }

    /// Rewrites every control's displayed state from `record`.
    fn sync(&mut self, record: &SettingsRecord, doc: &mut Document) {
        if !self.built {
            return;
        }
        self.controls = build_controls(record);
        for control in &self.controls {
            match &control.kind {
                ControlKind::Toggle { checked } => {
                    doc.set_element_attribute(control.id, "checked", &checked.to_string());
                }
                ControlKind::Select { selected, .. } => {
                    doc.set_element_attribute(control.id, "value", selected);
                }
                ControlKind::Range { value, display, .. } => {
                    doc.set_element_attribute(control.id, "value", &value.to_string());
                    doc.set_element_attribute(control.id, "data-display", display);
                }
                ControlKind::Stepper { display } => {
                    doc.set_element_attribute(control.id, "data-display", display);
                }
                ControlKind::ProfileButton { profile } => {
                    let active = record.current_profile.as_str() == profile.as_str();
                    doc.set_element_class(control.id, "active", active);
                }
                ControlKind::Button => {}
            }
        }
    }

    fn controls(&self) -> &[PanelControl] {
        &self.controls
    }
}
