//! UI state - status line, search bar, menus and pending prompts

use crate::editable::{EditableState, StringBuffer};
use crate::search::SearchOutcome;

/// A document-replacing action waiting on the unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    New,
    Open,
    Exit,
}

impl PendingAction {
    /// Question asked before running the action on a dirty document
    pub fn prompt_text(self) -> String {
        let what = match self {
            PendingAction::New => "creating a new file",
            PendingAction::Open => "opening another file",
            PendingAction::Exit => "exiting",
        };
        format!("Do you want to save changes before {}?", what)
    }
}

/// The search bar shown above the status bar
#[derive(Debug, Clone, Default)]
pub struct SearchBarState {
    /// Search term being typed
    pub input: EditableState<StringBuffer>,
    pub case_sensitive: bool,
    /// Typed text goes to the search term rather than the document
    pub focused: bool,
    /// Outcome of the last run, shown next to the input
    pub last_outcome: Option<SearchOutcome>,
}

impl SearchBarState {
    /// Freshly opened, focused, empty search bar
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn term(&self) -> String {
        self.input.text()
    }

    pub fn status_text(&self) -> Option<String> {
        self.last_outcome.map(|outcome| outcome.status_text())
    }
}

/// UI state that is not part of the document
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Last status message, shown after the caret position
    pub status_message: String,
    /// Open search bar, if any. At most one exists.
    pub search: Option<SearchBarState>,
    /// Index of the menu whose dropdown is open
    pub open_menu: Option<usize>,
    /// Action to resume once the Save As started by a prompt completes
    pub after_save: Option<PendingAction>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn search_open(&self) -> bool {
        self.search.is_some()
    }
}
