//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file at startup
//! - Choosing the write encoding of the initial new document
//! - Overriding the font

use clap::Parser;
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::encoding::TextEncoding;

/// A notepad-style text editor
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "A notepad-style text editor")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write encoding for a new document (utf-8, latin-1, utf-16, cp1252)
    #[arg(short = 'e', long, value_name = "ENCODING")]
    pub encoding: Option<TextEncoding>,

    /// TTF/OTF font file to render with
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,
}

impl CliArgs {
    /// Fold command-line overrides into the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(encoding) = self.encoding {
            config.default_encoding = encoding;
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
    }

    /// File to open once the window exists. Directories are rejected.
    pub fn startup_file(&self) -> Result<Option<PathBuf>, String> {
        match &self.path {
            Some(path) if path.is_dir() => {
                Err(format!("{} is a directory, not a file", path.display()))
            }
            Some(path) => Ok(Some(path.clone())),
            None => Ok(None),
        }
    }
}
