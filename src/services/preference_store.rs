//! Preference Store: the live Settings Record and its persisted copy.
//!
//! The record is only changed through the named setters below. Every successful
//! setter writes the whole record back under [`SETTINGS_KEY`]; applying it to the
//! document is the caller's job.

use serde_json::Value;
use tracing::{debug, warn};

use crate::services::storage::SharedStore;
use crate::types::errors::{PreferenceError, StorageError};
use crate::types::settings::{
    clamp_speech_rate, clamp_speech_volume, CurrentProfile, FieldKind, FontSize, SettingField,
    SettingsPatch, SettingsRecord,
};

/// Storage key of the serialized Settings Record.
pub const SETTINGS_KEY: &str = "accessibility-settings";

/// Trait defining the preference store interface.
pub trait PreferenceStoreTrait {
    fn load(&mut self) -> SettingsRecord;
    fn save(&self);
    fn settings(&self) -> &SettingsRecord;
    fn has_persisted(&self) -> bool;
}

pub struct PreferenceStore {
    storage: SharedStore,
    record: SettingsRecord,
    persisted: bool,
}

impl PreferenceStore {
    /// A store holding defaults. Call [`PreferenceStoreTrait::load`] to pick up saved state.
    pub fn new(storage: SharedStore) -> Self {
        Self {
            storage,
            record: SettingsRecord::default(),
            persisted: false,
        }
    }

    /// Reads a persisted record field by field over the defaults. Fields that are missing or
    /// hold out-of-domain values keep their default.
    fn merge_persisted(raw: &str) -> Option<SettingsRecord> {
        let parsed: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Saved accessibility settings are not valid JSON, using defaults");
                return None;
            }
        };
        let Value::Object(map) = parsed else {
            warn!("Saved accessibility settings are not an object, using defaults");
            return None;
        };

        let mut record = SettingsRecord::default();
        for field in SettingField::ALL {
            let Some(value) = map.get(field.as_str()) else {
                continue;
            };
            let token = match value {
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.as_f64().map(|f| f.to_string()).unwrap_or_default(),
                Value::String(s) => s.clone(),
                _ => String::new(),
            };
            if let Err(e) = record.set_token(field, &token) {
                warn!(error = %e, "Ignoring saved value");
            }
        }
        Some(record)
    }

    fn write(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.storage.set(SETTINGS_KEY, &json)
    }

    // === Named setters ===

    /// Sets a boolean field and persists.
    pub fn set_flag(&mut self, field: SettingField, value: bool) -> Result<(), PreferenceError> {
        *self.record.flag_mut(field)? = value;
        self.save();
        Ok(())
    }

    /// Flips a boolean field, persists, and returns the new value.
    pub fn toggle_flag(&mut self, field: SettingField) -> Result<bool, PreferenceError> {
        let slot = self.record.flag_mut(field)?;
        *slot = !*slot;
        let value = *slot;
        self.save();
        Ok(value)
    }

    /// Sets `fontSize` from its token. Invalid tokens change and persist nothing.
    pub fn set_font_size(&mut self, token: &str) -> Result<FontSize, PreferenceError> {
        let size: FontSize = token.parse()?;
        self.record.font_size = size;
        self.save();
        Ok(size)
    }

    /// Moves `fontSize` one step. At either end of the scale this is a no-op returning `None`.
    pub fn step_font_size(&mut self, larger: bool) -> Option<FontSize> {
        let current = self.record.font_size;
        let next = if larger { current.larger() } else { current.smaller() }?;
        self.record.font_size = next;
        self.save();
        Some(next)
    }

    /// Sets any enum-valued field from its token.
    pub fn set_choice(&mut self, field: SettingField, token: &str) -> Result<(), PreferenceError> {
        if field.kind() != FieldKind::Choice {
            return Err(PreferenceError::InvalidValue {
                field: field.as_str().to_string(),
                value: token.to_string(),
            });
        }
        self.record.set_token(field, token)?;
        self.save();
        Ok(())
    }

    /// Stores the clamped rate and returns it. Non-finite input is ignored.
    pub fn set_speech_rate(&mut self, rate: f64) -> Option<f64> {
        let rate = clamp_speech_rate(rate)?;
        self.record.speech_rate = rate;
        self.save();
        Some(rate)
    }

    /// Stores the clamped volume and returns it. Non-finite input is ignored.
    pub fn set_speech_volume(&mut self, volume: f64) -> Option<f64> {
        let volume = clamp_speech_volume(volume)?;
        self.record.speech_volume = volume;
        self.save();
        Some(volume)
    }

    /// Merges a partial record and tags the result, as one in-memory update followed by
    /// one persist.
    pub fn apply_patch(&mut self, patch: &SettingsPatch, profile: CurrentProfile) {
        let mut next = self.record.clone();
        patch.apply_to(&mut next);
        next.current_profile = profile;
        self.record = next;
        self.save();
    }

    /// Restores every field to its default and persists.
    pub fn reset(&mut self) {
        self.record = SettingsRecord::default();
        self.save();
    }

    /// Replaces the live record without writing it back.
    pub(crate) fn replace_unsaved(&mut self, record: SettingsRecord) {
        self.record = record;
    }

    /// Seeds flags from the host's reported preferences. Only honoured when nothing was
    /// persisted; the result is not written back. Returns whether anything changed.
    pub fn apply_system_preferences(&mut self, reduced_motion: bool, high_contrast: bool) -> bool {
        if self.persisted {
            return false;
        }
        let before = self.record.clone();
        self.record.reduced_motion |= reduced_motion;
        self.record.high_contrast |= high_contrast;
        self.record != before
    }
}

impl PreferenceStoreTrait for PreferenceStore {
    /// Loads the persisted record over the defaults. Never fails: unreadable storage or
    /// malformed content logs a warning and yields defaults.
    fn load(&mut self) -> SettingsRecord {
        let raw = match self.storage.get(SETTINGS_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Could not read accessibility settings, using defaults");
                None
            }
        };
        let merged = raw.as_deref().and_then(Self::merge_persisted);
        self.persisted = merged.is_some();
        self.record = merged.unwrap_or_default();
        debug!(persisted = self.persisted, "Accessibility settings loaded");
        self.record.clone()
    }

    /// Writes the whole record. A failed write is logged and the previous persisted value
    /// stays in place.
    fn save(&self) {
        if let Err(e) = self.write() {
            warn!(error = %e, "Could not save accessibility settings");
        }
    }

    fn settings(&self) -> &SettingsRecord {
        &self.record
    }

    fn has_persisted(&self) -> bool {
        self.persisted
    }
}
