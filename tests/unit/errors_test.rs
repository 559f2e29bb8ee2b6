//! Unit tests for the ThinkUp error types: display strings and conversions.

use thinkup::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_quota_display() {
    let err = StorageError::QuotaExceeded {
        key: "accessibility-settings".to_string(),
        size: 600,
        quota: 512,
    };
    assert_eq!(
        err.to_string(),
        "Storage quota exceeded writing 'accessibility-settings': 600 bytes, quota 512 bytes"
    );
}

#[test]
fn storage_error_backend_and_serialization_display() {
    assert_eq!(
        StorageError::Backend("disk I/O error".to_string()).to_string(),
        "Storage backend error: disk I/O error"
    );
    assert_eq!(
        StorageError::Serialization("trailing comma".to_string()).to_string(),
        "Storage serialization error: trailing comma"
    );
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, StorageError::Backend(_)));
}

// === PreferenceError Tests ===

#[test]
fn preference_error_display_variants() {
    assert_eq!(
        PreferenceError::InvalidValue {
            field: "fontSize".to_string(),
            value: "huge".to_string(),
        }
        .to_string(),
        "Invalid value for fontSize: 'huge'"
    );
    assert_eq!(
        PreferenceError::NotAFlag("speechRate".to_string()).to_string(),
        "Setting is not a flag: speechRate"
    );
    assert_eq!(
        PreferenceError::UnknownField("zoom".to_string()).to_string(),
        "Unknown setting: zoom"
    );
    assert_eq!(
        PreferenceError::UnknownProfile("elderly".to_string()).to_string(),
        "Unknown profile: elderly"
    );
}

#[test]
fn preference_error_from_token_parse() {
    use thinkup::types::settings::FontSize;
    let err = "gigantic".parse::<FontSize>().unwrap_err();
    assert_eq!(
        err,
        PreferenceError::InvalidValue {
            field: "fontSize".to_string(),
            value: "gigantic".to_string(),
        }
    );
}

// === RenderError / ContentError Tests ===

#[test]
fn render_error_missing_target_display() {
    assert_eq!(
        RenderError::MissingTarget("skills".to_string()).to_string(),
        "Render target not found: #skills"
    );
}

#[test]
fn content_error_display_variants() {
    assert_eq!(
        ContentError::Fixture("expected value at line 1".to_string()).to_string(),
        "Invalid content fixture: expected value at line 1"
    );
    assert_eq!(
        ContentError::UnknownPerson("nobody".to_string()).to_string(),
        "Person not found: nobody"
    );
}

// === ConfigError / ShortcutError Tests ===

#[test]
fn config_error_from_io_and_json() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: ConfigError = io.into();
    assert!(err.to_string().starts_with("Config I/O error:"));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ConfigError = json.into();
    assert!(err.to_string().starts_with("Config parse error:"));
}

#[test]
fn shortcut_error_display() {
    assert_eq!(
        ShortcutError::InvalidChord("Alt+".to_string()).to_string(),
        "Invalid key chord: 'Alt+'"
    );
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(PreferenceError::UnknownProfile("x".into()));
    assert!(err.source().is_none());
}
