//! Centralized configuration and log paths for quill
//!
//! Config files live under:
//! - Unix/macOS: `~/.config/quill/`
//! - Windows: `%APPDATA%\quill\`
//!
//! The error log is always `log/editor_errors.log`, relative to the working
//! directory the editor was started from.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "quill";

/// Directory holding the application log, relative to the working directory
pub const LOG_DIR: &str = "log";

/// File name of the append-only application log
pub const LOG_FILE_NAME: &str = "editor_errors.log";

/// Base config directory for quill
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/quill`
///   - Else: `~/.config/quill`
///
/// Windows:
///   - `%APPDATA%\quill`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/quill/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/quill/keymap.yaml`
pub fn keymap_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("keymap.yaml"))
}

/// `log/editor_errors.log`
pub fn log_file() -> PathBuf {
    Path::new(LOG_DIR).join(LOG_FILE_NAME)
}

/// Create the log directory if needed, returning it
pub fn ensure_log_dir() -> Result<PathBuf, String> {
    let dir = PathBuf::from(LOG_DIR);
    fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create directory {}: {}", dir.display(), e))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_relative() {
        assert_eq!(log_file(), PathBuf::from("log").join("editor_errors.log"));
        assert!(log_file().is_relative());
    }

    #[test]
    fn test_config_files_share_dir() {
        if let (Some(config), Some(keymap)) = (config_file(), keymap_file()) {
            assert_eq!(config.parent(), keymap.parent());
            assert!(config.ends_with("quill/config.yaml"));
        }
    }
}
