//! Grouped undo/redo history.
//!
//! Edits are recorded as [`EditOperation`]s and collected into [`EditGroup`]s.
//! Undo and redo always apply a whole group. A run of contiguous typed
//! characters (or of contiguous single-character deletions) stays in one open
//! group until a boundary is forced with [`EditHistory::separator`], the edit
//! kind changes, or an edit lands somewhere else.

use super::cursor::Cursor;

/// A single buffer change that can be undone/redone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOperation {
    /// Character offset where the edit occurred
    pub offset: usize,
    /// Text that was removed (empty for pure inserts)
    pub deleted_text: String,
    /// Text that was inserted (empty for pure deletes)
    pub inserted_text: String,
    pub cursor_before: Cursor,
    pub cursor_after: Cursor,
}

impl EditOperation {
    pub fn insert(offset: usize, text: String, cursor_before: Cursor, cursor_after: Cursor) -> Self {
        Self::replace(offset, String::new(), text, cursor_before, cursor_after)
    }

    pub fn delete(offset: usize, text: String, cursor_before: Cursor, cursor_after: Cursor) -> Self {
        Self::replace(offset, text, String::new(), cursor_before, cursor_after)
    }

    pub fn replace(
        offset: usize,
        deleted_text: String,
        inserted_text: String,
        cursor_before: Cursor,
        cursor_after: Cursor,
    ) -> Self {
        Self {
            offset,
            deleted_text,
            inserted_text,
            cursor_before,
            cursor_after,
        }
    }

    fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }
}

/// How an operation participates in grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// A single typed character
    Typing,
    /// A single-character backspace or delete
    Deleting,
    /// Anything else: paste, cut, newline, replacing a selection
    Other,
}

/// Operations that undo and redo as one unit.
#[derive(Debug, Clone)]
pub struct EditGroup {
    pub kind: EditKind,
    pub ops: Vec<EditOperation>,
}

impl EditGroup {
    /// Whether `next` continues this group's run without a gap.
    fn continues_with(&self, next: &EditOperation, kind: EditKind) -> bool {
        if kind != self.kind {
            return false;
        }
        let Some(last) = self.ops.last() else {
            return false;
        };
        match kind {
            EditKind::Typing => last.offset + last.inserted_len() == next.offset,
            // Backspace walks left, forward delete stays put
            EditKind::Deleting => {
                next.offset + next.deleted_len() == last.offset || next.offset == last.offset
            }
            EditKind::Other => false,
        }
    }

    /// Caret position before the first operation of the group
    pub fn cursor_before(&self) -> Option<Cursor> {
        self.ops.first().map(|op| op.cursor_before)
    }

    /// Caret position after the last operation of the group
    pub fn cursor_after(&self) -> Option<Cursor> {
        self.ops.last().map(|op| op.cursor_after)
    }
}

/// Undo/redo stacks of edit groups.
#[derive(Debug, Clone, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditGroup>,
    redo_stack: Vec<EditGroup>,
    /// `None` keeps every group
    max_groups: Option<usize>,
    /// Whether the top undo group still accepts merges
    open: bool,
}

impl EditHistory {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_groups(max_groups: Option<usize>) -> Self {
        Self {
            max_groups,
            ..Self::default()
        }
    }

    /// Record an operation, merging it into the open group when it continues
    /// that group's run. Clears the redo stack.
    pub fn push(&mut self, op: EditOperation, kind: EditKind) {
        self.redo_stack.clear();

        if self.open {
            if let Some(group) = self.undo_stack.last_mut() {
                if group.continues_with(&op, kind) {
                    group.ops.push(op);
                    return;
                }
            }
        }

        self.undo_stack.push(EditGroup {
            kind,
            ops: vec![op],
        });
        self.open = kind != EditKind::Other;

        if let Some(max) = self.max_groups {
            let excess = self.undo_stack.len().saturating_sub(max);
            if excess > 0 {
                self.undo_stack.drain(..excess);
            }
        }
    }

    /// Close the current group so the next edit starts a new one
    pub fn separator(&mut self) {
        self.open = false;
    }

    /// Take the most recent group for undoing (moves it to the redo stack).
    ///
    /// Closes the open group, so the next edit never merges into a group
    /// that was undone or redone.
    pub fn pop_undo(&mut self) -> Option<EditGroup> {
        let group = self.undo_stack.pop()?;
        self.redo_stack.push(group.clone());
        self.open = false;
        Some(group)
    }

    /// Take the most recently undone group for redoing
    pub fn pop_redo(&mut self) -> Option<EditGroup> {
        let group = self.redo_stack.pop()?;
        self.undo_stack.push(group.clone());
        self.open = false;
        Some(group)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open = false;
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(offset: usize, ch: char) -> EditOperation {
        EditOperation::insert(
            offset,
            ch.to_string(),
            Cursor::new(0, offset),
            Cursor::new(0, offset + 1),
        )
    }

    fn backspaced(offset: usize, ch: char) -> EditOperation {
        EditOperation::delete(
            offset,
            ch.to_string(),
            Cursor::new(0, offset + 1),
            Cursor::new(0, offset),
        )
    }

    #[test]
    fn test_contiguous_typing_merges() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.push(typed(1, 'b'), EditKind::Typing);
        history.push(typed(2, 'c'), EditKind::Typing);
        assert_eq!(history.undo_count(), 1);

        let group = history.pop_undo().unwrap();
        assert_eq!(group.ops.len(), 3);
        assert_eq!(group.cursor_before(), Some(Cursor::new(0, 0)));
        assert_eq!(group.cursor_after(), Some(Cursor::new(0, 3)));
    }

    #[test]
    fn test_gap_or_kind_change_starts_new_group() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.push(typed(5, 'b'), EditKind::Typing);
        assert_eq!(history.undo_count(), 2);

        history.push(backspaced(5, 'b'), EditKind::Deleting);
        assert_eq!(history.undo_count(), 3);
    }

    #[test]
    fn test_backspace_run_merges() {
        let mut history = EditHistory::new();
        history.push(backspaced(4, 'd'), EditKind::Deleting);
        history.push(backspaced(3, 'c'), EditKind::Deleting);
        history.push(backspaced(2, 'b'), EditKind::Deleting);
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_separator_closes_group() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.separator();
        history.push(typed(1, 'b'), EditKind::Typing);
        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_other_edits_never_merge() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Other);
        history.push(typed(1, 'b'), EditKind::Typing);
        history.push(typed(2, '\n'), EditKind::Other);
        assert_eq!(history.undo_count(), 3);
    }

    #[test]
    fn test_push_clears_redo() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.pop_undo();
        assert!(history.can_redo());

        history.push(typed(0, 'b'), EditKind::Typing);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_edit_after_undo_starts_new_group() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.push(typed(1, 'b'), EditKind::Typing);
        history.separator();
        history.push(typed(2, 'c'), EditKind::Typing);
        history.pop_undo();

        // Contiguous with "ab", but that group must stay closed
        history.push(typed(2, 'x'), EditKind::Typing);
        assert_eq!(history.undo_count(), 2);
        assert_eq!(history.pop_undo().unwrap().ops.len(), 1);
    }

    #[test]
    fn test_redo_group_is_not_reopened() {
        let mut history = EditHistory::new();
        history.push(typed(0, 'a'), EditKind::Typing);
        history.pop_undo();
        history.pop_redo();
        history.push(typed(1, 'b'), EditKind::Typing);
        assert_eq!(history.undo_count(), 2);
    }

    #[test]
    fn test_max_groups() {
        let mut history = EditHistory::with_max_groups(Some(3));
        for i in 0..5 {
            history.push(typed(i * 10, 'x'), EditKind::Typing);
        }
        assert_eq!(history.undo_count(), 3);
    }
}
