// ThinkUp platform abstraction
// Resolves where configuration and site data live on each OS, with environment overrides.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
use linux as os;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
use macos as os;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as os;

/// Overrides the config file path.
pub const CONFIG_ENV: &str = "THINKUP_CONFIG";
/// Overrides the directory holding `thinkup.db`.
pub const DATA_DIR_ENV: &str = "THINKUP_DATA_DIR";

const DATABASE_FILE: &str = "thinkup.db";
const CONFIG_FILE: &str = "config.json";

/// Per-OS configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/thinkup` or `~/.config/thinkup`
/// - **macOS**: `~/Library/Preferences/ThinkUp`
/// - **Windows**: `%APPDATA%/ThinkUp/config`
pub fn get_config_dir() -> PathBuf {
    os::config_dir()
}

/// Per-OS data directory.
///
/// - **Linux**: `$XDG_DATA_HOME/thinkup` or `~/.local/share/thinkup`
/// - **macOS**: `~/Library/Application Support/ThinkUp`
/// - **Windows**: `%LOCALAPPDATA%/ThinkUp/data`
pub fn get_data_dir() -> PathBuf {
    os::data_dir()
}

/// Per-OS cache directory, used for the WebView's own profile data.
///
/// - **Linux**: `$XDG_CACHE_HOME/thinkup` or `~/.cache/thinkup`
/// - **macOS**: `~/Library/Caches/ThinkUp`
/// - **Windows**: `%LOCALAPPDATA%/ThinkUp/cache`
pub fn get_cache_dir() -> PathBuf {
    os::cache_dir()
}

/// `THINKUP_CONFIG`, else `config.json` in the config directory.
pub fn config_path() -> PathBuf {
    non_empty_env(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| get_config_dir().join(CONFIG_FILE))
}

/// `thinkup.db` in `THINKUP_DATA_DIR`, else in the data directory.
pub fn database_path() -> PathBuf {
    non_empty_env(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(get_data_dir)
        .join(DATABASE_FILE)
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
