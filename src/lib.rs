//! Quill - a notepad-style text editor
//!
//! This crate provides the core types and logic for the editor, following the
//! Elm Architecture: every input is a [`Msg`], [`update::update`] applies it to
//! the [`AppModel`], and side effects come back as a [`Cmd`] for the runtime.

pub mod about;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod encoding;
pub mod file_io;
pub mod keymap;
pub mod menu;
pub mod messages;
pub mod model;
pub mod report;
pub mod search;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use encoding::TextEncoding;
pub use messages::Msg;
pub use model::AppModel;
