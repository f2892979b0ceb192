//! Message types for the Elm-style architecture
//!
//! Every input (keyboard, mouse, menu click, dialog answer) becomes a `Msg`
//! and flows through [`crate::update::update`].

use std::path::PathBuf;

use crate::encoding::TextEncoding;
use crate::model::PendingAction;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Caret movement and viewport scrolling in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    MoveCursor(Direction),
    /// Home
    MoveCursorLineStart,
    /// End
    MoveCursorLineEnd,
    /// Ctrl+Home
    MoveCursorDocumentStart,
    /// Ctrl+End
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,

    // === Selection Movement (Shift+key) ===
    MoveCursorWithSelection(Direction),
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,
    MoveCursorDocumentStartWithSelection,
    MoveCursorDocumentEndWithSelection,
    PageUpWithSelection,
    PageDownWithSelection,

    /// Mouse click
    SetCursorPosition { line: usize, column: usize },
    /// Shift+click or drag
    ExtendSelectionToPosition { line: usize, column: usize },
    /// Scroll viewport vertically (positive = down)
    Scroll(i32),
}

/// Text editing on the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    InsertChar(char),
    InsertNewline,
    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,
    Undo,
    Redo,
    Copy,
    Cut,
    /// Ask the runtime for clipboard contents
    Paste,
    /// Clipboard contents delivered by the runtime
    PasteText(String),
    SelectAll,
}

/// File menu actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMsg {
    New,
    Open,
    Save,
    SaveAs,
    /// Pick the encoding used for the next save
    ChangeEncoding(TextEncoding),
    /// Exit the application (menu, Ctrl+Q or window close)
    Exit,
}

/// The search bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    /// Show the search bar, or focus it if already open
    Open,
    /// Hide the search bar and clear highlights
    Close,
    InsertChar(char),
    /// Ask the runtime for clipboard contents
    Paste,
    /// Clipboard contents delivered by the runtime
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    MoveCursor(Direction),
    MoveCursorStart,
    MoveCursorEnd,
    ToggleCaseSensitive,
    /// Run the search (Enter)
    Run,
    /// Return keyboard focus to the document, keeping the bar open
    Blur,
}

/// Help menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpMsg {
    ShowInformation,
    OpenManual,
    ShowMembers,
}

/// Menu bar interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    /// Open the dropdown of the menu at this index
    OpenMenu(usize),
    CloseMenu,
    /// Activate an item of an open dropdown
    ActivateMenuItem { menu: usize, item: usize },
}

/// Answer to the three-way "save changes?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    Save,
    Discard,
    Cancel,
}

/// Results delivered back by the runtime, and window-level events
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    Resize(u32, u32),
    /// Open dialog closed; `None` when cancelled
    OpenDialogResult(Option<PathBuf>),
    /// Save As dialog closed; `None` when cancelled
    SaveAsDialogResult(Option<PathBuf>),
    /// Open a file directly (command line)
    OpenPath(PathBuf),
    UnsavedChangesAnswer {
        action: PendingAction,
        choice: PromptChoice,
    },
    EncodingChangeAnswer {
        encoding: TextEncoding,
        confirmed: bool,
    },
    /// A side effect run by the runtime failed
    OperationFailed {
        operation: String,
        error: String,
        visible: bool,
    },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Document(DocumentMsg),
    File(FileMsg),
    Search(SearchMsg),
    Help(HelpMsg),
    Ui(UiMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
