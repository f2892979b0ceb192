//! Command types for the Elm-style architecture
//!
//! Commands are the side effects `update` asks the runtime to perform:
//! native dialogs, clipboard access, opening URLs and quitting. Results come
//! back as `Msg::App(..)` messages.

use crate::encoding::TextEncoding;
use crate::model::PendingAction;

/// Severity of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Where clipboard text read by the runtime should be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTarget {
    Document,
    SearchBar,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),

    // === Dialogs ===
    /// Native open file dialog; answers with `AppMsg::OpenDialogResult`
    ShowOpenFileDialog,
    /// Native save dialog; answers with `AppMsg::SaveAsDialogResult`
    ShowSaveFileDialog { suggested_name: String },
    /// Yes/No/Cancel prompt; answers with `AppMsg::UnsavedChangesAnswer`
    PromptUnsavedChanges { action: PendingAction },
    /// Yes/No prompt; answers with `AppMsg::EncodingChangeAnswer`
    ConfirmEncodingChange { encoding: TextEncoding },
    /// Modal message box
    ShowMessage {
        level: MessageLevel,
        title: String,
        body: String,
    },

    // === Clipboard ===
    CopyToClipboard(String),
    /// Read clipboard text; answers with a paste message for `target`
    ReadClipboard { target: PasteTarget },

    /// Open a URL in the default browser
    OpenUrl(String),

    /// Request application exit
    Quit,
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn message(level: MessageLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Cmd::ShowMessage {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Combine two optional commands, flattening `None`s
    pub fn join(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Dialogs block; their answers trigger a redraw when they arrive
            Cmd::ShowOpenFileDialog
            | Cmd::ShowSaveFileDialog { .. }
            | Cmd::PromptUnsavedChanges { .. }
            | Cmd::ConfirmEncodingChange { .. }
            | Cmd::ShowMessage { .. } => false,
            Cmd::CopyToClipboard(_) | Cmd::ReadClipboard { .. } | Cmd::OpenUrl(_) => false,
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }
}
