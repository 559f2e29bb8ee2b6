//! Accessibility Manager: the mutators behind every accessibility control.
//!
//! Owns the preference store and the speech controller. Each mutator changes the record
//! through the store (which persists), re-applies the whole record to the document, and
//! queues a screen-reader announcement. Rejected input is logged and changes nothing.

use tracing::{debug, info, warn};

use crate::services::preference_applicator;
use crate::services::preference_store::{PreferenceStore, PreferenceStoreTrait};
use crate::services::profile_resolver;
use crate::services::speech_controller::{SpeechController, SpeechEngine};
use crate::services::storage::SharedStore;
use crate::types::document::{Document, MarkerTarget, Politeness};
use crate::types::profile::ProfileName;
use crate::types::settings::{ColorBlindMode, FieldKind, FontSize, SettingField, SettingsRecord};
use crate::types::speech::SpeechCompletion;

/// Body marker present while the visitor navigates with the keyboard.
pub const KEYBOARD_MODALITY_MARKER: &str = "keyboard-nav";

pub const RESET_PROMPT: &str = "¿Restablecer todas las configuraciones de accesibilidad?";

/// Asks the visitor to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// An answer collected before the call, e.g. by a dialog in the page.
#[derive(Debug, Clone, Copy)]
pub struct PreAnswered(pub bool);

impl Confirm for PreAnswered {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

/// Media-query results reported by the host at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

/// Screen-reader copy for a flag change.
fn flag_announcement(field: SettingField, on: bool) -> String {
    let (subject, feminine) = match field {
        SettingField::HighContrast => ("Modo alto contraste", false),
        SettingField::FocusIndicator => ("Indicador de foco", false),
        SettingField::ReducedMotion => ("Movimiento reducido", false),
        SettingField::KeyboardNavigation => ("Navegación por teclado", true),
        SettingField::TextToSpeech => ("Lector de texto", false),
        SettingField::ReadingMask => ("Máscara de lectura", true),
        SettingField::HighlightLinks => ("Resaltado de enlaces", false),
        SettingField::SimplifiedMode => ("Modo simplificado", false),
        SettingField::ReadingGuide => ("Guía de lectura", true),
        SettingField::DyslexiaFont => ("Fuente para dislexia", true),
        SettingField::HideImages => {
            return format!("Imágenes {}", if on { "ocultas" } else { "visibles" })
        }
        other => return format!("{} {}", other, on),
    };
    let state = match (on, feminine) {
        (true, false) => "activado",
        (false, false) => "desactivado",
        (true, true) => "activada",
        (false, true) => "desactivada",
    };
    format!("{} {}", subject, state)
}

fn color_blind_description(mode: ColorBlindMode) -> &'static str {
    match mode {
        ColorBlindMode::None => "ninguno",
        ColorBlindMode::Protanopia => "protanopia (rojo-verde)",
        ColorBlindMode::Deuteranopia => "deuteranopia (rojo-verde)",
        ColorBlindMode::Tritanopia => "tritanopia (azul-amarillo)",
        ColorBlindMode::Grayscale => "escala de grises",
        ColorBlindMode::Inverted => "colores invertidos",
    }
}

fn font_size_announcement(size: FontSize) -> String {
    format!("Tamaño de fuente cambiado a {}", size.label().to_lowercase())
}

pub struct AccessibilityManager {
    store: PreferenceStore,
    speech: SpeechController,
}

impl AccessibilityManager {
    pub fn new(storage: SharedStore, engine: Box<dyn SpeechEngine>, lang: &str) -> Self {
        Self {
            store: PreferenceStore::new(storage),
            speech: SpeechController::new(engine, lang),
        }
    }

    /// Loads saved preferences, folds in the host's media preferences on a first run, and
    /// applies the result.
    pub fn init(&mut self, doc: &mut Document, system: SystemPreferences) {
        self.store.load();
        if self
            .store
            .apply_system_preferences(system.reduced_motion, system.high_contrast)
        {
            debug!(?system, "System accessibility preferences applied");
        }
        self.refresh(doc);
        info!(profile = %self.settings().current_profile, "Accessibility initialised");
    }

    pub fn settings(&self) -> &SettingsRecord {
        self.store.settings()
    }

    pub fn speech(&self) -> &SpeechController {
        &self.speech
    }

    /// Re-applies the live record and keeps the read-aloud triggers in step with it.
    fn refresh(&mut self, doc: &mut Document) {
        preference_applicator::apply(doc, self.store.settings());
        let wanted = self.store.settings().text_to_speech;
        if wanted && !self.speech.is_enabled() {
            self.speech.enable(doc);
        } else if !wanted && self.speech.is_enabled() {
            self.speech.disable(doc);
        }
    }

    fn announce(doc: &mut Document, message: impl Into<String>) {
        doc.announce(message, Politeness::Polite);
    }

    // === Flags ===

    /// Flips a boolean setting. Returns the new value, or `None` if `field` is not a flag.
    pub fn toggle(&mut self, doc: &mut Document, field: SettingField) -> Option<bool> {
        match self.store.toggle_flag(field) {
            Ok(on) => {
                self.refresh(doc);
                Self::announce(doc, flag_announcement(field, on));
                Some(on)
            }
            Err(e) => {
                warn!(error = %e, "Rejected toggle");
                None
            }
        }
    }

    pub fn set_flag(&mut self, doc: &mut Document, field: SettingField, value: bool) -> bool {
        match self.store.set_flag(field, value) {
            Ok(()) => {
                self.refresh(doc);
                Self::announce(doc, flag_announcement(field, value));
                true
            }
            Err(e) => {
                warn!(error = %e, "Rejected flag change");
                false
            }
        }
    }

    // === Enumerations ===

    /// Sets `fontSize` from a token. Unknown tokens change nothing.
    pub fn set_font_size(&mut self, doc: &mut Document, token: &str) -> bool {
        match self.store.set_font_size(token) {
            Ok(size) => {
                self.refresh(doc);
                Self::announce(doc, font_size_announcement(size));
                true
            }
            Err(e) => {
                warn!(error = %e, "Rejected font size");
                false
            }
        }
    }

    pub fn increase_font_size(&mut self, doc: &mut Document) -> Option<FontSize> {
        self.step_font_size(doc, true)
    }

    pub fn decrease_font_size(&mut self, doc: &mut Document) -> Option<FontSize> {
        self.step_font_size(doc, false)
    }

    fn step_font_size(&mut self, doc: &mut Document, larger: bool) -> Option<FontSize> {
        let size = self.store.step_font_size(larger)?;
        self.refresh(doc);
        Self::announce(doc, font_size_announcement(size));
        Some(size)
    }

    /// Sets any enum-valued field from its token. Unknown tokens change nothing.
    pub fn set_choice(&mut self, doc: &mut Document, field: SettingField, token: &str) -> bool {
        if field == SettingField::FontSize {
            return self.set_font_size(doc, token);
        }
        if field.kind() != FieldKind::Choice {
            warn!(field = %field, "Not an enumerated setting");
            return false;
        }
        if let Err(e) = self.store.set_choice(field, token) {
            warn!(error = %e, "Rejected setting value");
            return false;
        }
        self.refresh(doc);
        let record = self.store.settings();
        let message = match field {
            SettingField::ColorBlindMode => format!(
                "Modo de daltonismo: {}",
                color_blind_description(record.color_blind_mode)
            ),
            SettingField::LineSpacing => format!("Espaciado de líneas: {}", token),
            SettingField::LetterSpacing => format!("Espaciado de letras: {}", token),
            SettingField::CursorSize => format!("Tamaño de cursor: {}", token),
            _ => format!("{}: {}", field, token),
        };
        Self::announce(doc, message);
        true
    }

    // === Speech ===

    pub fn set_speech_rate(&mut self, rate: f64) -> Option<f64> {
        let stored = self.store.set_speech_rate(rate);
        if stored.is_none() {
            warn!(rate, "Rejected speech rate");
        }
        stored
    }

    pub fn set_speech_volume(&mut self, volume: f64) -> Option<f64> {
        let stored = self.store.set_speech_volume(volume);
        if stored.is_none() {
            warn!(volume, "Rejected speech volume");
        }
        stored
    }

    pub fn speak(&mut self, text: &str) -> Option<u64> {
        self.speech.speak(text, self.store.settings())
    }

    /// Selection trigger from the page. Ignored unless read-aloud is on.
    pub fn read_selection(&mut self, text: &str) -> Option<u64> {
        self.speech.read_selection(text, self.store.settings())
    }

    pub fn pause_speech(&mut self) {
        self.speech.pause();
    }

    pub fn resume_speech(&mut self) {
        self.speech.resume();
    }

    pub fn cancel_speech(&mut self) -> bool {
        self.speech.cancel()
    }

    /// Handle for reporting engine events from outside the event loop.
    pub fn speech_events(&self) -> tokio::sync::mpsc::UnboundedSender<crate::types::speech::SpeechEvent> {
        self.speech.completion_sender()
    }

    pub fn poll_speech(&mut self) -> Vec<SpeechCompletion> {
        self.speech.poll()
    }

    // === Profiles and reset ===

    /// Loads a named profile. Unknown names change nothing.
    pub fn load_profile(&mut self, doc: &mut Document, name: &str) -> Option<ProfileName> {
        let profile = profile_resolver::apply_profile(&mut self.store, name)?;
        self.refresh(doc);
        Self::announce(doc, format!("Perfil {} cargado", profile.as_str()));
        Some(profile)
    }

    /// Restores defaults once the visitor confirms. Returns whether the reset happened.
    pub fn reset(&mut self, doc: &mut Document, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(RESET_PROMPT) {
            debug!("Reset declined");
            return false;
        }
        self.store.reset();
        self.refresh(doc);
        Self::announce(doc, "Configuración restablecida a valores predeterminados");
        true
    }

    // === Page events ===

    /// Keyboard modality tracking: `Tab` marks the body as keyboard-driven.
    pub fn on_key_down(&mut self, doc: &mut Document, key: &str) {
        if key == "Tab" {
            doc.add_marker(MarkerTarget::Body, KEYBOARD_MODALITY_MARKER);
        }
    }

    pub fn on_pointer_down(&mut self, doc: &mut Document) {
        doc.remove_marker(MarkerTarget::Body, KEYBOARD_MODALITY_MARKER);
    }

    /// Pointer position for the reading overlays.
    pub fn on_pointer_move(&mut self, doc: &mut Document, y: f64) -> usize {
        preference_applicator::track_pointer(doc, self.store.settings(), y)
    }

    /// Live change of the host's reduced-motion preference. Turning it on is applied and
    /// announced but not persisted.
    pub fn on_system_reduced_motion(&mut self, doc: &mut Document, reduce: bool) {
        if !reduce || self.store.settings().reduced_motion {
            return;
        }
        let mut record = self.store.settings().clone();
        record.reduced_motion = true;
        preference_applicator::apply(doc, &record);
        self.store.replace_unsaved(record);
        Self::announce(doc, "Movimiento reducido detectado en el sistema");
    }
}
