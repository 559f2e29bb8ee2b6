// Roaming config, local data.

use std::env;
use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("ThinkUp").join("config")
}

pub fn data_dir() -> PathBuf {
    let local = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local).join("ThinkUp").join("data")
}

pub fn cache_dir() -> PathBuf {
    let local = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local).join("ThinkUp").join("cache")
}
