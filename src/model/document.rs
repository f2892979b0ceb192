//! Document model - the text buffer and its file state

use std::path::{Path, PathBuf};

use crate::editable::{EditableState, RopeBuffer, TextBuffer};
use crate::encoding::TextEncoding;
use crate::file_io::LoadedFile;
use crate::util::filename_for_display;

/// Base of the window title
pub const APP_TITLE: &str = "Text Editor";

/// The open document: editable text plus where and how it is stored
#[derive(Debug, Clone)]
pub struct Document {
    /// Text, caret, selection and undo history
    pub editable: EditableState<RopeBuffer>,
    /// Path to the file on disk (None until first saved or opened)
    pub file_path: Option<PathBuf>,
    /// Encoding used for the next save
    pub encoding: TextEncoding,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    max_undo_groups: Option<usize>,
}

impl Document {
    /// Empty, unsaved document
    pub fn new(encoding: TextEncoding, max_undo_groups: Option<usize>) -> Self {
        Self {
            editable: EditableState::with_history_limit(RopeBuffer::new(), max_undo_groups),
            file_path: None,
            encoding,
            is_modified: false,
            max_undo_groups,
        }
    }

    /// Document holding a freshly opened file
    pub fn from_loaded(path: PathBuf, loaded: LoadedFile, max_undo_groups: Option<usize>) -> Self {
        let mut doc = Self::new(loaded.encoding, max_undo_groups);
        doc.editable.set_content(&loaded.content);
        doc.file_path = Some(path);
        doc
    }

    /// Go back to an empty, unsaved document ("New")
    pub fn reset(&mut self, encoding: TextEncoding) {
        *self = Self::new(encoding, self.max_undo_groups);
    }

    /// Record a buffer mutation. Returns true on the Clean -> Dirty transition.
    pub fn mark_modified(&mut self) -> bool {
        if self.is_modified {
            return false;
        }
        self.is_modified = true;
        tracing::info!("Document modified: {}", self.display_name());
        true
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: &Path) {
        self.file_path = Some(path.to_path_buf());
        self.is_modified = false;
    }

    pub fn text(&self) -> String {
        self.editable.text()
    }

    pub fn line_count(&self) -> usize {
        self.editable.buffer.line_count()
    }

    /// File name, or "Untitled"
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map(filename_for_display)
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Window title: `Text Editor - <name> [<encoding>]`, starred while dirty
    pub fn title(&self) -> String {
        let base = match self.file_path {
            Some(_) => format!("{} - {} [{}]", APP_TITLE, self.display_name(), self.encoding),
            None => format!("{} - Untitled", APP_TITLE),
        };
        if self.is_modified {
            format!("*{}", base)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        let mut doc = Document::new(TextEncoding::Utf8, None);
        assert_eq!(doc.title(), "Text Editor - Untitled");

        doc.mark_modified();
        assert_eq!(doc.title(), "*Text Editor - Untitled");

        doc.mark_saved(Path::new("/tmp/notes.txt"));
        doc.encoding = TextEncoding::Latin1;
        assert_eq!(doc.title(), "Text Editor - notes.txt [latin-1]");
    }

    #[test]
    fn test_mark_modified_transitions_once() {
        let mut doc = Document::new(TextEncoding::Utf8, None);
        assert!(doc.mark_modified());
        assert!(!doc.mark_modified());
        doc.mark_saved(Path::new("a.txt"));
        assert!(doc.mark_modified());
    }

    #[test]
    fn test_reset_keeps_undo_limit() {
        let loaded = LoadedFile {
            content: "text".to_string(),
            encoding: TextEncoding::Utf16,
        };
        let mut doc = Document::from_loaded(PathBuf::from("x.txt"), loaded, Some(5));
        assert_eq!(doc.text(), "text");
        assert!(!doc.editable.can_undo());

        doc.reset(TextEncoding::Utf8);
        assert_eq!(doc.file_path, None);
        assert_eq!(doc.encoding, TextEncoding::Utf8);
        assert_eq!(doc.max_undo_groups, Some(5));
        assert_eq!(doc.text(), "");
    }
}
