//! Text buffer traits and implementations for the editing widget.
//!
//! `TextBuffer` (read-only) and `TextBufferMut` (read-write) abstract over a
//! `String` backend for the single-line search field and a rope backend for
//! the document. All offsets are character offsets.

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use std::ops::Range;

/// Read-only view into a text buffer for cursor navigation and rendering.
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Length of a specific line in characters (excluding the line break)
    fn line_length(&self, line: usize) -> usize;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Total length in bytes
    fn len_bytes(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get line content (without its line break)
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// Convert (line, column) to a character offset
    fn position_to_offset(&self, line: usize, column: usize) -> usize;

    /// Convert a character offset to (line, column)
    fn offset_to_position(&self, offset: usize) -> (usize, usize);

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String
    fn content(&self) -> String;
}

/// Mutable buffer operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert single character at character offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

// =============================================================================
// StringBuffer - single-line inputs (search bar)
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn line_count(&self) -> usize {
        1
    }

    fn line_length(&self, line: usize) -> usize {
        if line == 0 {
            self.text.chars().count()
        } else {
            0
        }
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn len_bytes(&self) -> usize {
        self.text.len()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        (line == 0).then_some(Cow::Borrowed(self.text.as_str()))
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line != 0 {
            return self.len_chars();
        }
        column.min(self.len_chars())
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        (0, offset.min(self.len_chars()))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }
}

// =============================================================================
// RopeBuffer - the document
// =============================================================================

/// TextBuffer implementation wrapping `ropey::Rope`.
#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

/// Number of chars taken by the line break at the end of `line`.
///
/// Ropey splits lines on `\r\n` and every Unicode line break, so a CRLF
/// pair counts as one break of two chars.
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }
    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_length(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        slice.len_chars() - line_break_len(slice)
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        let visible = slice.slice(..slice.len_chars() - line_break_len(slice));
        Some(Cow::from(visible))
    }

    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(line);
        line_start + column.min(self.line_length(line))
    }

    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(clamped);
        let line_start = self.rope.line_to_char(line);
        (line, (clamped - line_start).min(self.line_length(line)))
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert_char(clamped, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_buffer_utf8() {
        let mut buf = StringBuffer::from_text("héllo");
        assert_eq!(buf.len_chars(), 5);
        assert_eq!(buf.len_bytes(), 6);
        buf.insert(2, "X");
        assert_eq!(buf.as_str(), "héXllo");
        buf.remove(0..2);
        assert_eq!(buf.as_str(), "Xllo");
    }

    #[test]
    fn test_string_buffer_slice() {
        let buf = StringBuffer::from_text("hello world");
        assert_eq!(buf.slice(0..5), "hello");
        assert_eq!(buf.slice(6..50), "world");
        assert_eq!(buf.slice(8..3), "");
    }

    #[test]
    fn test_rope_buffer_lines() {
        let buf = RopeBuffer::from_text("line1\nline2\nline3");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(0).unwrap().as_ref(), "line1");
        assert_eq!(buf.line(2).unwrap().as_ref(), "line3");
        assert!(buf.line(3).is_none());
    }

    #[test]
    fn test_rope_buffer_crlf_line_length() {
        let buf = RopeBuffer::from_text("ab\r\ncd\r\n");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line_length(0), 2);
        assert_eq!(buf.line(1).unwrap().as_ref(), "cd");
        assert_eq!(buf.position_to_offset(1, 0), 4);
        assert_eq!(buf.offset_to_position(3), (0, 2));
    }

    #[test]
    fn test_rope_buffer_position_conversion() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.offset_to_position(5), (0, 5));
        assert_eq!(buf.offset_to_position(6), (1, 0));
        assert_eq!(buf.offset_to_position(99), (1, 5));
        assert_eq!(buf.position_to_offset(1, 5), 11);
        assert_eq!(buf.position_to_offset(0, 99), 5);
    }

    #[test]
    fn test_rope_buffer_edit() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.insert(6, "big ");
        assert_eq!(buf.content(), "hello\nbig world");
        buf.remove(5..6);
        assert_eq!(buf.content(), "hellobig world");
        buf.set_content("fresh");
        assert_eq!(buf.content(), "fresh");
    }
}
