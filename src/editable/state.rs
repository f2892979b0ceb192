//! EditableState - editable text with a caret, a selection and grouped history.

use std::ops::Range;

use super::buffer::{TextBuffer, TextBufferMut};
use super::cursor::{Cursor, Position};
use super::history::{EditHistory, EditKind, EditOperation};
use super::selection::Selection;

/// Editable text with one caret, one selection and undo history.
///
/// Generic over the buffer type B (StringBuffer for the search field,
/// RopeBuffer for the document).
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    pub buffer: B,
    cursor: Cursor,
    selection: Selection,
    history: EditHistory,
}

impl<B: TextBuffer + Default> Default for EditableState<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: TextBuffer> EditableState<B> {
    /// Caret at the start, unbounded history
    pub fn new(buffer: B) -> Self {
        Self::with_history_limit(buffer, None)
    }

    pub fn with_history_limit(buffer: B, max_undo_groups: Option<usize>) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(0, 0),
            selection: Selection::collapsed(Position::zero()),
            history: EditHistory::with_max_groups(max_undo_groups),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Character offset of the caret
    pub fn cursor_offset(&self) -> usize {
        self.buffer
            .position_to_offset(self.cursor.line, self.cursor.column)
    }

    /// Selected character range, `None` when nothing is selected
    pub fn selection_range(&self) -> Option<Range<usize>> {
        if self.selection.is_empty() {
            return None;
        }
        let start = self.selection.start();
        let end = self.selection.end();
        Some(
            self.buffer.position_to_offset(start.line, start.column)
                ..self.buffer.position_to_offset(end.line, end.column),
        )
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.selection_range()
            .map(|range| self.buffer.slice(range))
            .unwrap_or_default()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Force an undo-group boundary
    pub fn separator(&mut self) {
        self.history.separator();
    }

    fn collapse_selection(&mut self) {
        self.selection = Selection::collapsed(self.cursor.to_position());
    }

    /// Common tail of every caret movement. Any caret jump closes the
    /// current undo group.
    fn finish_move(&mut self, extend_selection: bool) {
        if extend_selection {
            self.selection.head = self.cursor.to_position();
        } else {
            self.collapse_selection();
        }
        self.history.separator();
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.buffer.line_count().saturating_sub(1));
        Position::new(line, pos.column.min(self.buffer.line_length(line)))
    }

    fn place_at_offset(&mut self, offset: usize) {
        let (line, column) = self.buffer.offset_to_position(offset);
        self.cursor.place(Position::new(line, column));
        self.collapse_selection();
    }
}

// =============================================================================
// Movement Operations
// =============================================================================

impl<B: TextBuffer> EditableState<B> {
    pub fn move_left(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            self.cursor.place(self.selection.start());
            self.finish_move(false);
            return;
        }

        if self.cursor.column > 0 {
            self.cursor.column -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.column = self.buffer.line_length(self.cursor.line);
        }
        self.cursor.desired_column = None;
        self.finish_move(extend_selection);
    }

    pub fn move_right(&mut self, extend_selection: bool) {
        if !extend_selection && self.has_selection() {
            self.cursor.place(self.selection.end());
            self.finish_move(false);
            return;
        }

        if self.cursor.column < self.buffer.line_length(self.cursor.line) {
            self.cursor.column += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count() {
            self.cursor.line += 1;
            self.cursor.column = 0;
        }
        self.cursor.desired_column = None;
        self.finish_move(extend_selection);
    }

    pub fn move_up(&mut self, extend_selection: bool) {
        self.move_lines_up(1, extend_selection);
    }

    pub fn move_down(&mut self, extend_selection: bool) {
        self.move_lines_down(1, extend_selection);
    }

    /// Move up by `count` lines, keeping the desired column (Page Up)
    pub fn move_lines_up(&mut self, count: usize, extend_selection: bool) {
        if self.cursor.line == 0 {
            self.cursor.place(Position::zero());
        } else {
            self.cursor.set_desired_column();
            self.cursor.line = self.cursor.line.saturating_sub(count);
            let line_len = self.buffer.line_length(self.cursor.line);
            self.cursor.column = self.cursor.effective_column().min(line_len);
        }
        self.finish_move(extend_selection);
    }

    /// Move down by `count` lines, keeping the desired column (Page Down)
    pub fn move_lines_down(&mut self, count: usize, extend_selection: bool) {
        let last_line = self.buffer.line_count().saturating_sub(1);
        if self.cursor.line >= last_line {
            self.cursor
                .place(Position::new(last_line, self.buffer.line_length(last_line)));
        } else {
            self.cursor.set_desired_column();
            self.cursor.line = (self.cursor.line + count).min(last_line);
            let line_len = self.buffer.line_length(self.cursor.line);
            self.cursor.column = self.cursor.effective_column().min(line_len);
        }
        self.finish_move(extend_selection);
    }

    pub fn move_line_start(&mut self, extend_selection: bool) {
        self.cursor.place(Position::new(self.cursor.line, 0));
        self.finish_move(extend_selection);
    }

    pub fn move_line_end(&mut self, extend_selection: bool) {
        let line_len = self.buffer.line_length(self.cursor.line);
        self.cursor.place(Position::new(self.cursor.line, line_len));
        self.finish_move(extend_selection);
    }

    pub fn move_document_start(&mut self, extend_selection: bool) {
        self.cursor.place(Position::zero());
        self.finish_move(extend_selection);
    }

    pub fn move_document_end(&mut self, extend_selection: bool) {
        let last_line = self.buffer.line_count().saturating_sub(1);
        let last_col = self.buffer.line_length(last_line);
        self.cursor.place(Position::new(last_line, last_col));
        self.finish_move(extend_selection);
    }

    /// Put the caret at `pos` (clamped to the buffer)
    pub fn set_caret(&mut self, pos: Position, extend_selection: bool) {
        let pos = self.clamp_position(pos);
        self.cursor.place(pos);
        self.finish_move(extend_selection);
    }

    /// Put the caret at a character offset (clamped to the buffer)
    pub fn set_caret_offset(&mut self, offset: usize, extend_selection: bool) {
        let (line, column) = self.buffer.offset_to_position(offset);
        self.set_caret(Position::new(line, column), extend_selection);
    }

    /// Select the whole buffer, leaving the caret at the start
    pub fn select_all(&mut self) {
        let last_line = self.buffer.line_count().saturating_sub(1);
        let end = Position::new(last_line, self.buffer.line_length(last_line));
        self.cursor.place(Position::zero());
        self.selection = Selection::new(end, Position::zero());
        self.history.separator();
    }
}

// =============================================================================
// Editing Operations (require TextBufferMut)
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Remove the selected text without recording history.
    /// Returns the offset and the removed text.
    fn take_selection(&mut self) -> Option<(usize, String)> {
        let range = self.selection_range()?;
        let deleted = self.buffer.slice(range.clone());
        self.buffer.remove(range.clone());
        self.place_at_offset(range.start);
        Some((range.start, deleted))
    }

    /// Insert a character at the caret, replacing any selection
    pub fn insert_char(&mut self, ch: char) -> bool {
        let cursor_before = self.cursor;
        let (offset, deleted) = self
            .take_selection()
            .unwrap_or_else(|| (self.cursor_offset(), String::new()));

        self.buffer.insert_char(offset, ch);
        self.place_at_offset(offset + 1);

        let kind = if ch == '\n' || !deleted.is_empty() {
            EditKind::Other
        } else {
            EditKind::Typing
        };
        self.history.push(
            EditOperation::replace(offset, deleted, ch.to_string(), cursor_before, self.cursor),
            kind,
        );
        true
    }

    /// Insert text at the caret as one undo group, replacing any selection.
    /// Empty text is a no-op.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let cursor_before = self.cursor;
        let (offset, deleted) = self
            .take_selection()
            .unwrap_or_else(|| (self.cursor_offset(), String::new()));

        self.buffer.insert(offset, text);
        self.place_at_offset(offset + text.chars().count());

        self.history.push(
            EditOperation::replace(offset, deleted, text.to_string(), cursor_before, self.cursor),
            EditKind::Other,
        );
        self.history.separator();
        true
    }

    /// Delete the selection, or the character before the caret (Backspace).
    /// A CRLF pair is removed as one line break.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection().is_some();
        }

        let offset = self.cursor_offset();
        if offset == 0 {
            return false;
        }
        let start = if offset >= 2 && self.buffer.slice(offset - 2..offset) == "\r\n" {
            offset - 2
        } else {
            offset - 1
        };

        self.remove_range(start..offset)
    }

    /// Delete the selection, or the character after the caret (Delete)
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection().is_some();
        }

        let offset = self.cursor_offset();
        if offset >= self.buffer.len_chars() {
            return false;
        }
        let end = if self.buffer.slice(offset..offset + 2) == "\r\n" {
            offset + 2
        } else {
            offset + 1
        };

        self.remove_range(offset..end)
    }

    fn remove_range(&mut self, range: Range<usize>) -> bool {
        let cursor_before = self.cursor;
        let deleted = self.buffer.slice(range.clone());
        self.buffer.remove(range.clone());
        self.place_at_offset(range.start);
        self.history.push(
            EditOperation::delete(range.start, deleted, cursor_before, self.cursor),
            EditKind::Deleting,
        );
        true
    }

    /// Delete the selected text as its own undo group and return it
    pub fn delete_selection(&mut self) -> Option<String> {
        let cursor_before = self.cursor;
        let (offset, deleted) = self.take_selection()?;
        self.history.push(
            EditOperation::delete(offset, deleted.clone(), cursor_before, self.cursor),
            EditKind::Other,
        );
        Some(deleted)
    }

    /// Undo the most recent group
    pub fn undo(&mut self) -> bool {
        let Some(group) = self.history.pop_undo() else {
            return false;
        };

        for op in group.ops.iter().rev() {
            let end = op.offset + op.inserted_text.chars().count();
            self.buffer.remove(op.offset..end);
            self.buffer.insert(op.offset, &op.deleted_text);
        }

        if let Some(cursor) = group.cursor_before() {
            let pos = self.clamp_position(cursor.to_position());
            self.cursor.place(pos);
        }
        self.collapse_selection();
        true
    }

    /// Redo the most recently undone group
    pub fn redo(&mut self) -> bool {
        let Some(group) = self.history.pop_redo() else {
            return false;
        };

        for op in &group.ops {
            let end = op.offset + op.deleted_text.chars().count();
            self.buffer.remove(op.offset..end);
            self.buffer.insert(op.offset, &op.inserted_text);
        }

        if let Some(cursor) = group.cursor_after() {
            let pos = self.clamp_position(cursor.to_position());
            self.cursor.place(pos);
        }
        self.collapse_selection();
        true
    }

    /// Replace the whole content, caret at the start, history cleared
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.cursor = Cursor::new(0, 0);
        self.collapse_selection();
        self.history.clear();
    }
}
