//! Editing, undo/redo and clipboard commands on the document

mod common;

use common::{run, test_model, type_text};
use quill::commands::{Cmd, PasteTarget};
use quill::editable::Position;
use quill::messages::{Direction, DocumentMsg, EditorMsg, Msg};

fn select(model: &mut quill::model::AppModel, from: (usize, usize), to: (usize, usize)) {
    run(
        model,
        Msg::Editor(EditorMsg::SetCursorPosition {
            line: from.0,
            column: from.1,
        }),
    );
    run(
        model,
        Msg::Editor(EditorMsg::ExtendSelectionToPosition {
            line: to.0,
            column: to.1,
        }),
    );
}

// ========================================================================
// Typing and deleting
// ========================================================================

#[test]
fn test_newline_splits_line() {
    let mut model = test_model("ab");
    run(&mut model, Msg::move_cursor(Direction::Right));
    run(&mut model, Msg::Document(DocumentMsg::InsertNewline));

    assert_eq!(model.document.text(), "a\nb");
    assert_eq!(model.document.editable.cursor().to_position(), Position::new(1, 0));
}

#[test]
fn test_typing_replaces_selection() {
    let mut model = test_model("hello world");
    select(&mut model, (0, 0), (0, 5));
    type_text(&mut model, "J");
    assert_eq!(model.document.text(), "J world");
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut model = test_model("abc");
    let cmds = run(&mut model, Msg::Document(DocumentMsg::DeleteBackward));
    assert!(cmds.is_empty());
    assert!(!model.document.is_modified);
}

#[test]
fn test_delete_forward_joins_lines() {
    let mut model = test_model("a\nb");
    run(&mut model, Msg::Editor(EditorMsg::MoveCursorLineEnd));
    run(&mut model, Msg::Document(DocumentMsg::DeleteForward));
    assert_eq!(model.document.text(), "ab");
}

// ========================================================================
// Undo / redo
// ========================================================================

#[test]
fn test_undo_removes_a_typed_run() {
    let mut model = test_model("");
    type_text(&mut model, "hello");
    run(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.document.text(), "");

    run(&mut model, Msg::Document(DocumentMsg::Redo));
    assert_eq!(model.document.text(), "hello");
}

#[test]
fn test_caret_move_starts_new_undo_group() {
    let mut model = test_model("");
    type_text(&mut model, "ab");
    run(&mut model, Msg::move_cursor(Direction::Left));
    run(&mut model, Msg::move_cursor(Direction::Right));
    type_text(&mut model, "cd");

    run(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.document.text(), "ab");
    run(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.document.text(), "");
}

#[test]
fn test_new_edit_clears_redo() {
    let mut model = test_model("");
    type_text(&mut model, "a");
    run(&mut model, Msg::Document(DocumentMsg::Undo));
    type_text(&mut model, "b");

    let cmds = run(&mut model, Msg::Document(DocumentMsg::Redo));
    assert!(cmds.is_empty());
    assert_eq!(model.document.text(), "b");
}

#[test]
fn test_undo_with_empty_history_is_silent() {
    let mut model = test_model("text");
    assert!(run(&mut model, Msg::Document(DocumentMsg::Undo)).is_empty());
    assert!(run(&mut model, Msg::Document(DocumentMsg::Redo)).is_empty());
    assert_eq!(model.document.text(), "text");
}

#[test]
fn test_edits_clear_search_highlights() {
    let mut model = test_model("abc abc");
    model.search_highlights = quill::search::find_all("abc abc", "abc", true).matches;
    type_text(&mut model, "x");
    assert!(model.search_highlights.is_empty());
}

// ========================================================================
// Clipboard
// ========================================================================

#[test]
fn test_copy_without_selection_does_nothing() {
    let mut model = test_model("abc");
    assert!(run(&mut model, Msg::Document(DocumentMsg::Copy)).is_empty());
    assert!(run(&mut model, Msg::Document(DocumentMsg::Cut)).is_empty());
    assert_eq!(model.document.text(), "abc");
}

#[test]
fn test_copy_puts_selection_on_clipboard() {
    let mut model = test_model("one\ntwo");
    select(&mut model, (0, 1), (1, 2));

    let cmds = run(&mut model, Msg::Document(DocumentMsg::Copy));
    assert_eq!(cmds, vec![Cmd::CopyToClipboard("ne\ntw".to_string())]);
    assert!(!model.document.is_modified);
}

#[test]
fn test_cut_removes_selection() {
    let mut model = test_model("hello world");
    select(&mut model, (0, 5), (0, 11));

    let cmds = run(&mut model, Msg::Document(DocumentMsg::Cut));
    assert!(cmds.contains(&Cmd::CopyToClipboard(" world".to_string())));
    assert_eq!(model.document.text(), "hello");
    assert!(model.document.is_modified);

    run(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.document.text(), "hello world");
}

#[test]
fn test_paste_reads_clipboard_then_inserts() {
    let mut model = test_model("ac");
    run(&mut model, Msg::move_cursor(Direction::Right));

    let cmds = run(&mut model, Msg::Document(DocumentMsg::Paste));
    assert_eq!(
        cmds,
        vec![Cmd::ReadClipboard {
            target: PasteTarget::Document
        }]
    );

    run(&mut model, Msg::Document(DocumentMsg::PasteText("b".to_string())));
    assert_eq!(model.document.text(), "abc");
}

#[test]
fn test_paste_is_one_undo_step() {
    let mut model = test_model("");
    run(
        &mut model,
        Msg::Document(DocumentMsg::PasteText("several words\nand lines".to_string())),
    );
    run(&mut model, Msg::Document(DocumentMsg::Undo));
    assert_eq!(model.document.text(), "");
}

#[test]
fn test_select_all_selects_whole_text() {
    let mut model = test_model("one\ntwo");
    run(&mut model, Msg::Document(DocumentMsg::SelectAll));
    assert_eq!(model.document.editable.selected_text(), "one\ntwo");
}
