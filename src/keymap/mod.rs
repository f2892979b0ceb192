//! Configurable keyboard mapping system
//!
//! - Maps keystrokes to editor commands
//! - Uses Cmd on macOS and Ctrl elsewhere for the "command" modifier
//! - Lets users override bindings via `<config dir>/quill/keymap.yaml`
//! - Routes keys to the search bar or the document depending on focus
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → Keystroke → Keymap::lookup(ctx) → Command → Vec<Msg>
//! ```
//!
//! Menu items hold a `Command` too, so a click and its shortcut dispatch the
//! same messages.

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::keystroke_from_winit;
