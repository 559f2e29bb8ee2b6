use thiserror::Error;

// === StorageError ===

/// Errors raised by the key-value persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The value does not fit in the remaining storage quota.
    #[error("Storage quota exceeded writing '{key}': {size} bytes, quota {quota} bytes")]
    QuotaExceeded { key: String, size: usize, quota: usize },
    /// The backing store failed (SQLite error, poisoned lock, ...).
    #[error("Storage backend error: {0}")]
    Backend(String),
    /// A value could not be serialized or parsed.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

// === PreferenceError ===

/// Errors related to accessibility preference mutation.
#[derive(Debug, Error, PartialEq)]
pub enum PreferenceError {
    /// The value is not in the field's domain.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },
    /// A boolean operation was attempted on a non-boolean field.
    #[error("Setting is not a flag: {0}")]
    NotAFlag(String),
    /// No setting with that name exists.
    #[error("Unknown setting: {0}")]
    UnknownField(String),
    /// No accessibility profile with that name exists.
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),
}

// === RenderError ===

/// Errors related to rendering into the document.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// The region the view renders into is not present in the document.
    #[error("Render target not found: #{0}")]
    MissingTarget(String),
}

// === ContentError ===

/// Errors related to static content fixtures.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A bundled fixture could not be parsed.
    #[error("Invalid content fixture: {0}")]
    Fixture(String),
    /// No person with the given id exists in the fixtures.
    #[error("Person not found: {0}")]
    UnknownPerson(String),
}

// === ConfigError ===

/// Errors related to loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// === ShortcutError ===

/// Errors related to keyboard shortcut bindings.
#[derive(Debug, Error, PartialEq)]
pub enum ShortcutError {
    /// The chord string could not be parsed (e.g. empty, or only modifiers).
    #[error("Invalid key chord: '{0}'")]
    InvalidChord(String),
}
