//! File menu: new, open, save, save as, encoding, exit
//!
//! Document-replacing actions (New, Open, Exit) on a dirty document go
//! through the unsaved-changes prompt first; the answer comes back as
//! `AppMsg::UnsavedChangesAnswer`.

use std::path::{Path, PathBuf};

use crate::commands::{Cmd, MessageLevel};
use crate::encoding::TextEncoding;
use crate::file_io::{self, FileError};
use crate::messages::FileMsg;
use crate::model::{AppModel, Document, PendingAction};
use crate::report::report;
use crate::util::filename_for_display;

pub fn update_file(model: &mut AppModel, msg: FileMsg) -> Option<Cmd> {
    match msg {
        FileMsg::New => guard_unsaved(model, PendingAction::New),
        FileMsg::Open => guard_unsaved(model, PendingAction::Open),
        FileMsg::Exit => guard_unsaved(model, PendingAction::Exit),

        FileMsg::Save => match model.document.file_path.clone() {
            Some(path) => match save_to(model, &path) {
                Ok(()) => {
                    model.ui.set_status(format!("Saved: {}", path.display()));
                    Some(Cmd::Redraw)
                }
                Err(cmd) => Some(cmd),
            },
            None => Some(save_as_dialog(model)),
        },
        FileMsg::SaveAs => Some(save_as_dialog(model)),

        FileMsg::ChangeEncoding(encoding) => {
            if model.document.is_modified {
                Some(Cmd::ConfirmEncodingChange { encoding })
            } else {
                apply_encoding(model, encoding)
            }
        }
    }
}

/// Prompt when dirty, otherwise run the action right away
fn guard_unsaved(model: &mut AppModel, action: PendingAction) -> Option<Cmd> {
    if model.document.is_modified {
        Some(Cmd::PromptUnsavedChanges { action })
    } else {
        proceed(model, action)
    }
}

/// Run a document-replacing action without asking
pub(super) fn proceed(model: &mut AppModel, action: PendingAction) -> Option<Cmd> {
    match action {
        PendingAction::New => {
            new_document(model);
            Some(Cmd::Redraw)
        }
        PendingAction::Open => Some(Cmd::ShowOpenFileDialog),
        PendingAction::Exit => {
            tracing::info!("Exiting");
            Some(Cmd::Quit)
        }
    }
}

fn new_document(model: &mut AppModel) {
    model.document.reset(model.config.default_encoding);
    model.clear_highlights();
    model.viewport.top_line = 0;
    model.viewport.left_column = 0;
    model.ui.set_status("New file created");
    tracing::info!("New file created");
}

pub(super) fn save_as_dialog(model: &AppModel) -> Cmd {
    let suggested_name = model
        .document
        .file_path
        .as_deref()
        .map(filename_for_display)
        .unwrap_or_else(|| "untitled.txt".to_string());
    Cmd::ShowSaveFileDialog { suggested_name }
}

/// Open `path` into the document. On failure the current document is kept.
pub(super) fn open_path(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    match file_io::open_document(&path) {
        Ok(loaded) => {
            let encoding = loaded.encoding;
            model.document = Document::from_loaded(path.clone(), loaded, model.config.max_undo_groups);
            model.clear_highlights();
            model.viewport.top_line = 0;
            model.viewport.left_column = 0;
            model.ensure_cursor_visible();
            model
                .ui
                .set_status(format!("File opened: {} ({})", path.display(), encoding));
            Some(Cmd::Redraw)
        }
        Err(err) => Some(file_error("open file", &path, err)),
    }
}

/// Save the document to `path` with its current encoding.
///
/// On success the document becomes clean and takes `path` as its file.
/// On failure the returned command shows the error to the user.
pub(super) fn save_to(model: &mut AppModel, path: &Path) -> Result<(), Cmd> {
    let content = model.document.text();
    match file_io::save_document(path, &content, model.document.encoding) {
        Ok(_) => {
            model.document.mark_saved(path);
            Ok(())
        }
        Err(err) => Err(file_error("save file", path, err)),
    }
}

fn apply_encoding(model: &mut AppModel, encoding: TextEncoding) -> Option<Cmd> {
    model.document.encoding = encoding;
    model
        .ui
        .set_status(format!("Encoding changed to: {}", encoding));
    tracing::info!("Encoding changed to {}", encoding);
    Some(Cmd::Redraw)
}

pub(super) fn confirm_encoding(
    model: &mut AppModel,
    encoding: TextEncoding,
    confirmed: bool,
) -> Option<Cmd> {
    if confirmed {
        apply_encoding(model, encoding)
    } else {
        None
    }
}

/// Log a file error and build the message box describing it
fn file_error(operation: &str, path: &Path, err: FileError) -> Cmd {
    report(operation, &err, false);
    Cmd::message(
        MessageLevel::Error,
        err.title(),
        err.user_message(&filename_for_display(path)),
    )
}

/// Save As without an extension writes a `.txt` file
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("txt")
    }
}
