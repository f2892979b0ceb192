//! Editor configuration
//!
//! Read from `~/.config/quill/config.yaml`. Every key is optional; a missing
//! or unreadable file falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::about::DEFAULT_MANUAL_URL;
use crate::encoding::TextEncoding;

/// Editor configuration loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// TTF/OTF font to render with. `None` probes common monospace fonts.
    pub font_path: Option<PathBuf>,
    /// Font size in pixels
    pub font_size: f32,
    pub window_width: u32,
    pub window_height: u32,
    /// Columns a tab character advances to
    pub tab_width: usize,
    /// Undo groups kept per document. `None` keeps everything.
    pub max_undo_groups: Option<usize>,
    /// Write encoding for new documents
    pub default_encoding: TextEncoding,
    /// Page opened by Help > User Manual
    pub manual_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 16.0,
            window_width: 900,
            window_height: 600,
            tab_width: 4,
            max_undo_groups: None,
            default_encoding: TextEncoding::Utf8,
            manual_url: DEFAULT_MANUAL_URL.to_string(),
        }
    }
}

impl EditorConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text. An empty document yields the defaults.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(content)?;
        config.tab_width = config.tab_width.max(1);
        config.font_size = config.font_size.clamp(6.0, 96.0);
        Ok(config)
    }
}
