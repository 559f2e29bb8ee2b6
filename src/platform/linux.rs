// XDG base directories, falling back to the usual dot-directories under $HOME.

use std::env;
use std::path::PathBuf;

fn xdg_or_home(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            fallback.iter().fold(PathBuf::from(home), |p, seg| p.join(seg))
        }
    }
}

pub fn config_dir() -> PathBuf {
    xdg_or_home("XDG_CONFIG_HOME", &[".config"]).join("thinkup")
}

pub fn data_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", &[".local", "share"]).join("thinkup")
}

pub fn cache_dir() -> PathBuf {
    xdg_or_home("XDG_CACHE_HOME", &[".cache"]).join("thinkup")
}
