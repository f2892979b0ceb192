//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. File I/O runs
//! synchronously inside `update`; dialogs, clipboard and URL opening are
//! returned as commands for the runtime.

mod app;
mod document;
mod editor;
mod file;
mod help;
mod search;
mod ui;

use crate::commands::Cmd;
use crate::keymap::Command;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use file::{update_file, with_default_extension};
pub use help::update_help;
pub use search::update_search;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    let _span = tracing::debug_span!("update", msg = %msg_type_name(&msg)).entered();

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::File(m) => file::update_file(model, m),
        Msg::Search(m) => search::update_search(model, m),
        Msg::Help(m) => help::update_help(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Run every message of a command and combine the resulting commands
pub fn dispatch_command(model: &mut AppModel, command: Command) -> Option<Cmd> {
    tracing::debug!(target: "message", ?command, "dispatch");
    command
        .to_msgs()
        .into_iter()
        .fold(None, |acc, msg| Cmd::join(acc, update(model, msg)))
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::File(m) => format!("File::{:?}", m),
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Help(m) => format!("Help::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
