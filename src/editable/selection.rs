//! Selection range between an anchor and the caret.

use super::cursor::Position;

/// A text selection. The anchor stays fixed while the head follows the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// A selection with nothing selected
    pub fn collapsed(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    /// Whether `pos` lies inside the selection (end exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start() && pos < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_selection_bounds() {
        let sel = Selection::new(Position::new(2, 4), Position::new(0, 1));
        assert_eq!(sel.start(), Position::new(0, 1));
        assert_eq!(sel.end(), Position::new(2, 4));
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_contains_is_end_exclusive() {
        let sel = Selection::new(Position::new(0, 2), Position::new(0, 8));
        assert!(!sel.contains(Position::new(0, 1)));
        assert!(sel.contains(Position::new(0, 2)));
        assert!(!sel.contains(Position::new(0, 8)));
        assert!(Selection::collapsed(Position::zero()).is_empty());
    }
}
