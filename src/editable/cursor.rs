//! Caret position types.

/// A position in the text buffer (line and column, both 0-indexed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub const fn zero() -> Self {
        Self { line: 0, column: 0 }
    }
}

/// The insert caret, with a remembered column for vertical movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
    /// Column to aim for when moving up/down through shorter lines
    pub desired_column: Option<usize>,
}

impl Cursor {
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            desired_column: None,
        }
    }

    pub const fn to_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Move to `pos`, forgetting any remembered column
    pub fn place(&mut self, pos: Position) {
        self.line = pos.line;
        self.column = pos.column;
        self.desired_column = None;
    }

    /// Remember the current column before a vertical move
    pub fn set_desired_column(&mut self) {
        if self.desired_column.is_none() {
            self.desired_column = Some(self.column);
        }
    }

    pub fn effective_column(&self) -> usize {
        self.desired_column.unwrap_or(self.column)
    }
}

impl From<Position> for Cursor {
    fn from(pos: Position) -> Self {
        Self::new(pos.line, pos.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 5) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 3));
    }

    #[test]
    fn test_desired_column_survives_short_lines() {
        let mut cursor = Cursor::new(5, 10);
        cursor.set_desired_column();
        cursor.column = 3;
        assert_eq!(cursor.effective_column(), 10);

        cursor.place(Position::new(2, 1));
        assert_eq!(cursor.effective_column(), 1);
        assert_eq!(cursor.to_position(), Position::new(2, 1));
    }
}
