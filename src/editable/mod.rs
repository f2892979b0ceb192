//! The editing widget: buffer, caret, selection and undo history.
//!
//! The same [`EditableState`] drives the document (backed by a rope) and the
//! single-line search field (backed by a `String`).
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer implementations
//! - [`StringBuffer`]: single-line input buffer
//! - [`RopeBuffer`]: document buffer backed by `ropey::Rope`
//! - [`EditHistory`]: undo/redo stacks of [`EditGroup`]s with explicit boundaries
//! - [`EditableState`]: caret, selection and history over a buffer
//!
//! # Example
//!
//! ```
//! use quill::editable::{EditableState, RopeBuffer};
//!
//! let mut state = EditableState::new(RopeBuffer::from_text("hello"));
//! state.move_document_end(false);
//! state.insert_char('!');
//! assert_eq!(state.text(), "hello!");
//!
//! state.undo();
//! assert_eq!(state.text(), "hello");
//! ```

mod buffer;
mod cursor;
mod history;
mod selection;
mod state;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use cursor::{Cursor, Position};
pub use history::{EditGroup, EditHistory, EditKind, EditOperation};
pub use selection::Selection;
pub use state::EditableState;
