//! Clean/dirty tracking and the unsaved-changes prompt
//!
//! New, Open and Exit on a modified document ask first. The answer decides
//! whether the action runs, waits for a save, or is dropped.

mod common;

use common::{model_with_file, run, test_model, type_text, write_file};
use quill::commands::Cmd;
use quill::encoding::TextEncoding;
use quill::messages::{AppMsg, DocumentMsg, FileMsg, Msg, PromptChoice};
use quill::model::PendingAction;
use tempfile::TempDir;

fn answer(action: PendingAction, choice: PromptChoice) -> Msg {
    Msg::App(AppMsg::UnsavedChangesAnswer { action, choice })
}

// ========================================================================
// Dirty flag and title
// ========================================================================

#[test]
fn test_first_edit_marks_modified_and_stars_title() {
    let mut model = test_model("");
    assert_eq!(model.title(), "Text Editor - Untitled");

    type_text(&mut model, "x");
    assert!(model.document.is_modified);
    assert_eq!(model.title(), "*Text Editor - Untitled");
}

#[test]
fn test_caret_movement_does_not_mark_modified() {
    let mut model = test_model("abc\ndef");
    run(&mut model, Msg::move_cursor(quill::messages::Direction::Down));
    run(&mut model, Msg::Document(DocumentMsg::SelectAll));
    assert!(!model.document.is_modified);
}

#[test]
fn test_undo_back_to_saved_text_stays_modified() {
    let mut model = test_model("");
    type_text(&mut model, "a");
    run(&mut model, Msg::Document(DocumentMsg::Undo));

    assert_eq!(model.document.text(), "");
    assert!(model.document.is_modified);
}

#[test]
fn test_title_shows_file_name_and_encoding() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "notes.txt", b"hi");
    let model = model_with_file(&path);
    assert_eq!(model.title(), "Text Editor - notes.txt [utf-8]");
}

// ========================================================================
// Guarded actions on a clean document
// ========================================================================

#[test]
fn test_new_on_clean_document_needs_no_prompt() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "a.txt", b"content");
    let mut model = model_with_file(&path);

    let cmds = run(&mut model, Msg::File(FileMsg::New));
    assert!(!cmds.iter().any(|c| matches!(c, Cmd::PromptUnsavedChanges { .. })));
    assert_eq!(model.document.text(), "");
    assert!(model.document.file_path.is_none());
    assert_eq!(model.document.encoding, TextEncoding::Utf8);
    assert_eq!(model.ui.status_message, "New file created");
}

#[test]
fn test_open_on_clean_document_shows_dialog() {
    let mut model = test_model("");
    assert_eq!(run(&mut model, Msg::File(FileMsg::Open)), vec![Cmd::ShowOpenFileDialog]);
}

#[test]
fn test_exit_on_clean_document_quits() {
    let mut model = test_model("");
    assert_eq!(run(&mut model, Msg::File(FileMsg::Exit)), vec![Cmd::Quit]);
}

#[test]
fn test_cancelled_open_dialog_changes_nothing() {
    let mut model = test_model("text");
    assert!(run(&mut model, Msg::App(AppMsg::OpenDialogResult(None))).is_empty());
    assert_eq!(model.document.text(), "text");
}

// ========================================================================
// Guarded actions on a dirty document
// ========================================================================

#[test]
fn test_dirty_document_prompts_before_each_action() {
    for (msg, action) in [
        (FileMsg::New, PendingAction::New),
        (FileMsg::Open, PendingAction::Open),
        (FileMsg::Exit, PendingAction::Exit),
    ] {
        let mut model = test_model("");
        type_text(&mut model, "unsaved");
        let cmds = run(&mut model, Msg::File(msg));
        assert_eq!(cmds, vec![Cmd::PromptUnsavedChanges { action }]);
        assert_eq!(model.document.text(), "unsaved");
    }
}

#[test]
fn test_cancel_leaves_everything_alone() {
    let mut model = test_model("");
    type_text(&mut model, "unsaved");

    let cmds = run(&mut model, answer(PendingAction::Exit, PromptChoice::Cancel));
    assert!(cmds.is_empty());
    assert!(model.document.is_modified);
    assert_eq!(model.document.text(), "unsaved");
}

#[test]
fn test_discard_runs_the_action() {
    let mut model = test_model("");
    type_text(&mut model, "unsaved");

    run(&mut model, answer(PendingAction::New, PromptChoice::Discard));
    assert_eq!(model.document.text(), "");
    assert!(!model.document.is_modified);

    type_text(&mut model, "again");
    let cmds = run(&mut model, answer(PendingAction::Exit, PromptChoice::Discard));
    assert_eq!(cmds, vec![Cmd::Quit]);
}

#[test]
fn test_save_with_path_saves_then_runs_action() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "a.txt", b"one");
    let mut model = model_with_file(&path);
    model.document.editable.move_document_end(false);
    type_text(&mut model, " two");

    let cmds = run(&mut model, answer(PendingAction::Open, PromptChoice::Save));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two");
    assert!(!model.document.is_modified);
    assert!(cmds.contains(&Cmd::ShowOpenFileDialog));
}

#[test]
fn test_save_without_path_goes_through_save_as() {
    let dir = TempDir::new().unwrap();
    let mut model = test_model("");
    type_text(&mut model, "draft");

    let cmds = run(&mut model, answer(PendingAction::New, PromptChoice::Save));
    assert!(matches!(
        cmds.as_slice(),
        [Cmd::ShowSaveFileDialog { suggested_name }] if suggested_name == "untitled.txt"
    ));
    assert_eq!(model.ui.after_save, Some(PendingAction::New));

    let target = dir.path().join("draft.txt");
    run(&mut model, Msg::App(AppMsg::SaveAsDialogResult(Some(target.clone()))));

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "draft");
    // The pending New ran after the save
    assert_eq!(model.document.text(), "");
    assert!(model.document.file_path.is_none());
    assert_eq!(model.ui.after_save, None);
}

#[test]
fn test_cancelled_save_as_drops_pending_action() {
    let mut model = test_model("");
    type_text(&mut model, "draft");

    run(&mut model, answer(PendingAction::Exit, PromptChoice::Save));
    let cmds = run(&mut model, Msg::App(AppMsg::SaveAsDialogResult(None)));

    assert!(!cmds.contains(&Cmd::Quit));
    assert_eq!(model.ui.after_save, None);
    assert!(model.document.is_modified);
    assert_eq!(model.document.text(), "draft");
}

#[test]
fn test_failed_save_aborts_pending_action() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "latin.txt", b"caf\xE9");
    let mut model = model_with_file(&path);
    model.document.editable.move_document_end(false);
    // Not representable in Latin-1
    type_text(&mut model, "€");

    let cmds = run(&mut model, answer(PendingAction::Exit, PromptChoice::Save));

    assert!(!cmds.contains(&Cmd::Quit));
    assert!(cmds.iter().any(|c| matches!(c, Cmd::ShowMessage { .. })));
    assert!(model.document.is_modified);
}

// ========================================================================
// Encoding change
// ========================================================================

#[test]
fn test_encoding_change_on_clean_document_applies_directly() {
    let mut model = test_model("");
    run(&mut model, Msg::File(FileMsg::ChangeEncoding(TextEncoding::Latin1)));
    assert_eq!(model.document.encoding, TextEncoding::Latin1);
    assert_eq!(model.ui.status_message, "Encoding changed to: latin-1");
}

#[test]
fn test_encoding_change_on_dirty_document_asks_first() {
    let mut model = test_model("");
    type_text(&mut model, "x");

    let cmds = run(&mut model, Msg::File(FileMsg::ChangeEncoding(TextEncoding::Utf16)));
    assert_eq!(
        cmds,
        vec![Cmd::ConfirmEncodingChange {
            encoding: TextEncoding::Utf16
        }]
    );
    assert_eq!(model.document.encoding, TextEncoding::Utf8);

    run(
        &mut model,
        Msg::App(AppMsg::EncodingChangeAnswer {
            encoding: TextEncoding::Utf16,
            confirmed: false,
        }),
    );
    assert_eq!(model.document.encoding, TextEncoding::Utf8);

    run(
        &mut model,
        Msg::App(AppMsg::EncodingChangeAnswer {
            encoding: TextEncoding::Utf16,
            confirmed: true,
        }),
    );
    assert_eq!(model.document.encoding, TextEncoding::Utf16);
}
