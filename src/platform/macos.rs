// ~/Library locations.

use std::env;
use std::path::PathBuf;

fn library() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))).join("Library")
}

pub fn config_dir() -> PathBuf {
    library().join("Preferences").join("ThinkUp")
}

pub fn data_dir() -> PathBuf {
    library().join("Application Support").join("ThinkUp")
}

pub fn cache_dir() -> PathBuf {
    library().join("Caches").join("ThinkUp")
}
