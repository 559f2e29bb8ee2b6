//! Site configuration loading.
//!
//! Configuration is a single JSON file. A missing file means defaults; a malformed one is
//! reported and also falls back to defaults, so a bad edit never keeps the site from starting.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::platform;
use crate::types::config::SiteConfig;
use crate::types::errors::ConfigError;

/// Reads and parses a config file.
///
/// # Errors
/// `ConfigError::Io` when the file cannot be read, `ConfigError::Parse` when it is not valid.
pub fn read_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Loads the config from `path_override`, else `THINKUP_CONFIG`, else the platform config
/// directory. Never fails.
pub fn load_config(path_override: Option<PathBuf>) -> SiteConfig {
    let path = path_override.unwrap_or_else(platform::config_path);
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return SiteConfig::default();
    }
    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring config file");
            SiteConfig::default()
        }
    }
}
