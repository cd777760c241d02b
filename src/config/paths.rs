//! Filesystem locations: `$CF_HOME/.cf/...`, falling back to the user's home directory.

use directories::BaseDirs;
use std::path::PathBuf;

/// Root that holds the `.cf` directory. `CF_HOME` wins over the home directory.
pub fn cf_home_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("CF_HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// `<cf_home>/.cf`
pub fn config_dir() -> Option<PathBuf> {
    cf_home_dir().map(|home| home.join(".cf"))
}

/// `<cf_home>/.cf/config.json`
pub fn session_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// `<cf_home>/.cf/settings.toml`
pub fn settings_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.toml"))
}

/// `<cf_home>/.cf/logs/cf.log`, or a relative path when no home can be found.
pub fn default_log_file() -> PathBuf {
    config_dir()
        .map(|dir| dir.join("logs").join("cf.log"))
        .unwrap_or_else(|| PathBuf::from(".cf/logs/cf.log"))
}
