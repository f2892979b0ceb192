//! Command enum representing all executable editor actions
//!
//! Commands are the bridge between keybindings, menu items and the message
//! system. Each command maps to one or more `Msg` values for the Elm-style
//! update loop, so a shortcut and a menu click run exactly the same code.

use std::str::FromStr;

use crate::encoding::TextEncoding;
use crate::messages::{
    Direction, DocumentMsg, EditorMsg, FileMsg, HelpMsg, Msg, SearchMsg, UiMsg,
};

/// All executable editor commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement
    // ========================================================================
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorLineStart,
    MoveCursorLineEnd,
    MoveCursorDocumentStart,
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,

    MoveCursorUpWithSelection,
    MoveCursorDownWithSelection,
    MoveCursorLeftWithSelection,
    MoveCursorRightWithSelection,
    MoveCursorLineStartWithSelection,
    MoveCursorLineEndWithSelection,
    MoveCursorDocumentStartWithSelection,
    MoveCursorDocumentEndWithSelection,
    PageUpWithSelection,
    PageDownWithSelection,

    // ========================================================================
    // Editing
    // ========================================================================
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    SelectAll,
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,

    // ========================================================================
    // File
    // ========================================================================
    NewFile,
    OpenFile,
    SaveFile,
    SaveFileAs,
    Quit,
    SetEncodingUtf8,
    SetEncodingLatin1,
    SetEncodingUtf16,

    // ========================================================================
    // Search bar
    // ========================================================================
    OpenSearch,
    CloseSearch,
    RunSearch,
    ToggleSearchCase,
    SearchDeleteBackward,
    SearchDeleteForward,
    SearchCursorLeft,
    SearchCursorRight,
    SearchCursorStart,
    SearchCursorEnd,
    SearchPaste,
    /// Hand keyboard focus back to the document
    FocusEditor,

    // ========================================================================
    // Help
    // ========================================================================
    ShowInformation,
    OpenManual,
    ShowMembers,

    CloseMenu,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// Messages dispatched when this command runs
    pub fn to_msgs(self) -> Vec<Msg> {
        use Command::*;

        let msg = match self {
            MoveCursorUp => Msg::Editor(EditorMsg::MoveCursor(Direction::Up)),
            MoveCursorDown => Msg::Editor(EditorMsg::MoveCursor(Direction::Down)),
            MoveCursorLeft => Msg::Editor(EditorMsg::MoveCursor(Direction::Left)),
            MoveCursorRight => Msg::Editor(EditorMsg::MoveCursor(Direction::Right)),
            MoveCursorLineStart => Msg::Editor(EditorMsg::MoveCursorLineStart),
            MoveCursorLineEnd => Msg::Editor(EditorMsg::MoveCursorLineEnd),
            MoveCursorDocumentStart => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
            MoveCursorDocumentEnd => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),
            PageUp => Msg::Editor(EditorMsg::PageUp),
            PageDown => Msg::Editor(EditorMsg::PageDown),

            MoveCursorUpWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Up))
            }
            MoveCursorDownWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Down))
            }
            MoveCursorLeftWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Left))
            }
            MoveCursorRightWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorWithSelection(Direction::Right))
            }
            MoveCursorLineStartWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorLineStartWithSelection)
            }
            MoveCursorLineEndWithSelection => Msg::Editor(EditorMsg::MoveCursorLineEndWithSelection),
            MoveCursorDocumentStartWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorDocumentStartWithSelection)
            }
            MoveCursorDocumentEndWithSelection => {
                Msg::Editor(EditorMsg::MoveCursorDocumentEndWithSelection)
            }
            PageUpWithSelection => Msg::Editor(EditorMsg::PageUpWithSelection),
            PageDownWithSelection => Msg::Editor(EditorMsg::PageDownWithSelection),

            InsertNewline => Msg::Document(DocumentMsg::InsertNewline),
            InsertTab => Msg::Document(DocumentMsg::InsertChar('\t')),
            DeleteBackward => Msg::Document(DocumentMsg::DeleteBackward),
            DeleteForward => Msg::Document(DocumentMsg::DeleteForward),
            SelectAll => Msg::Document(DocumentMsg::SelectAll),
            Copy => Msg::Document(DocumentMsg::Copy),
            Cut => Msg::Document(DocumentMsg::Cut),
            Paste => Msg::Document(DocumentMsg::Paste),
            Undo => Msg::Document(DocumentMsg::Undo),
            Redo => Msg::Document(DocumentMsg::Redo),

            NewFile => Msg::File(FileMsg::New),
            OpenFile => Msg::File(FileMsg::Open),
            SaveFile => Msg::File(FileMsg::Save),
            SaveFileAs => Msg::File(FileMsg::SaveAs),
            Quit => Msg::File(FileMsg::Exit),
            SetEncodingUtf8 => Msg::File(FileMsg::ChangeEncoding(TextEncoding::Utf8)),
            SetEncodingLatin1 => Msg::File(FileMsg::ChangeEncoding(TextEncoding::Latin1)),
            SetEncodingUtf16 => Msg::File(FileMsg::ChangeEncoding(TextEncoding::Utf16)),

            OpenSearch => Msg::Search(SearchMsg::Open),
            CloseSearch => Msg::Search(SearchMsg::Close),
            RunSearch => Msg::Search(SearchMsg::Run),
            ToggleSearchCase => Msg::Search(SearchMsg::ToggleCaseSensitive),
            SearchDeleteBackward => Msg::Search(SearchMsg::DeleteBackward),
            SearchDeleteForward => Msg::Search(SearchMsg::DeleteForward),
            SearchCursorLeft => Msg::Search(SearchMsg::MoveCursor(Direction::Left)),
            SearchCursorRight => Msg::Search(SearchMsg::MoveCursor(Direction::Right)),
            SearchCursorStart => Msg::Search(SearchMsg::MoveCursorStart),
            SearchCursorEnd => Msg::Search(SearchMsg::MoveCursorEnd),
            SearchPaste => Msg::Search(SearchMsg::Paste),
            FocusEditor => Msg::Search(SearchMsg::Blur),

            ShowInformation => Msg::Help(HelpMsg::ShowInformation),
            OpenManual => Msg::Help(HelpMsg::OpenManual),
            ShowMembers => Msg::Help(HelpMsg::ShowMembers),

            CloseMenu => Msg::Ui(UiMsg::CloseMenu),
            Unbound => return Vec::new(),
        };
        vec![msg]
    }

    /// Command that switches the write encoding to `encoding`, if one exists
    pub fn set_encoding(encoding: TextEncoding) -> Option<Command> {
        match encoding {
            TextEncoding::Utf8 => Some(Command::SetEncodingUtf8),
            TextEncoding::Latin1 => Some(Command::SetEncodingLatin1),
            TextEncoding::Utf16 => Some(Command::SetEncodingUtf16),
            TextEncoding::Cp1252 => None,
        }
    }
}

/// Parse the command names used in keymap.yaml
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Command::*;

        Ok(match s {
            "MoveCursorUp" => MoveCursorUp,
            "MoveCursorDown" => MoveCursorDown,
            "MoveCursorLeft" => MoveCursorLeft,
            "MoveCursorRight" => MoveCursorRight,
            "MoveCursorLineStart" => MoveCursorLineStart,
            "MoveCursorLineEnd" => MoveCursorLineEnd,
            "MoveCursorDocumentStart" => MoveCursorDocumentStart,
            "MoveCursorDocumentEnd" => MoveCursorDocumentEnd,
            "PageUp" => PageUp,
            "PageDown" => PageDown,

            "MoveCursorUpWithSelection" => MoveCursorUpWithSelection,
            "MoveCursorDownWithSelection" => MoveCursorDownWithSelection,
            "MoveCursorLeftWithSelection" => MoveCursorLeftWithSelection,
            "MoveCursorRightWithSelection" => MoveCursorRightWithSelection,
            "MoveCursorLineStartWithSelection" => MoveCursorLineStartWithSelection,
            "MoveCursorLineEndWithSelection" => MoveCursorLineEndWithSelection,
            "MoveCursorDocumentStartWithSelection" => MoveCursorDocumentStartWithSelection,
            "MoveCursorDocumentEndWithSelection" => MoveCursorDocumentEndWithSelection,
            "PageUpWithSelection" => PageUpWithSelection,
            "PageDownWithSelection" => PageDownWithSelection,

            "InsertNewline" => InsertNewline,
            "InsertTab" => InsertTab,
            "DeleteBackward" => DeleteBackward,
            "DeleteForward" => DeleteForward,
            "SelectAll" => SelectAll,
            "Copy" => Copy,
            "Cut" => Cut,
            "Paste" => Paste,
            "Undo" => Undo,
            "Redo" => Redo,

            "NewFile" => NewFile,
            "OpenFile" => OpenFile,
            "SaveFile" => SaveFile,
            "SaveFileAs" => SaveFileAs,
            "Quit" => Quit,
            "SetEncodingUtf8" => SetEncodingUtf8,
            "SetEncodingLatin1" => SetEncodingLatin1,
            "SetEncodingUtf16" => SetEncodingUtf16,

            "OpenSearch" => OpenSearch,
            "CloseSearch" => CloseSearch,
            "RunSearch" => RunSearch,
            "ToggleSearchCase" => ToggleSearchCase,
            "SearchDeleteBackward" => SearchDeleteBackward,
            "SearchDeleteForward" => SearchDeleteForward,
            "SearchCursorLeft" => SearchCursorLeft,
            "SearchCursorRight" => SearchCursorRight,
            "SearchCursorStart" => SearchCursorStart,
            "SearchCursorEnd" => SearchCursorEnd,
            "SearchPaste" => SearchPaste,
            "FocusEditor" => FocusEditor,

            "ShowInformation" => ShowInformation,
            "OpenManual" => OpenManual,
            "ShowMembers" => ShowMembers,

            "CloseMenu" => CloseMenu,
            "Unbound" => Unbound,
            _ => return Err(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!("SaveFileAs".parse(), Ok(Command::SaveFileAs));
        assert_eq!("Unbound".parse(), Ok(Command::Unbound));
        assert_eq!("saveFile".parse::<Command>(), Err(()));
    }

    #[test]
    fn test_unbound_dispatches_nothing() {
        assert!(Command::Unbound.to_msgs().is_empty());
    }

    #[test]
    fn test_encoding_commands() {
        assert_eq!(
            Command::SetEncodingLatin1.to_msgs(),
            vec![Msg::File(FileMsg::ChangeEncoding(TextEncoding::Latin1))]
        );
        assert_eq!(
            Command::set_encoding(TextEncoding::Utf16),
            Some(Command::SetEncodingUtf16)
        );
        assert_eq!(Command::set_encoding(TextEncoding::Cp1252), None);
    }

    #[test]
    fn test_tab_inserts_tab_char() {
        assert_eq!(
            Command::InsertTab.to_msgs(),
            vec![Msg::Document(DocumentMsg::InsertChar('\t'))]
        );
    }
}
