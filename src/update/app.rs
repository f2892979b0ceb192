//! App message handlers (dialog answers, window events, runtime failures)

use crate::commands::Cmd;
use crate::messages::{AppMsg, PromptChoice};
use crate::model::{AppModel, PendingAction};
use crate::report::report_text;

use super::file::{confirm_encoding, open_path, proceed, save_as_dialog, save_to, with_default_extension};

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        // A cancelled dialog is a no-op
        AppMsg::OpenDialogResult(None) => None,
        AppMsg::OpenDialogResult(Some(path)) | AppMsg::OpenPath(path) => open_path(model, path),

        AppMsg::SaveAsDialogResult(None) => {
            if let Some(action) = model.ui.after_save.take() {
                tracing::debug!("Save As cancelled, dropping pending {:?}", action);
            }
            None
        }
        AppMsg::SaveAsDialogResult(Some(path)) => {
            let path = with_default_extension(path);
            let pending = model.ui.after_save.take();
            match save_to(model, &path) {
                Ok(()) => {
                    model.ui.set_status(format!("Saved as: {}", path.display()));
                    Cmd::join(Some(Cmd::Redraw), pending.and_then(|a| proceed(model, a)))
                }
                Err(cmd) => Some(cmd),
            }
        }

        AppMsg::UnsavedChangesAnswer { action, choice } => answer_unsaved(model, action, choice),

        AppMsg::EncodingChangeAnswer {
            encoding,
            confirmed,
        } => confirm_encoding(model, encoding, confirmed),

        AppMsg::OperationFailed {
            operation,
            error,
            visible,
        } => report_text(&operation, &error, visible),
    }
}

fn answer_unsaved(model: &mut AppModel, action: PendingAction, choice: PromptChoice) -> Option<Cmd> {
    match choice {
        PromptChoice::Cancel => {
            tracing::debug!("{:?} cancelled at the unsaved-changes prompt", action);
            None
        }
        PromptChoice::Discard => proceed(model, action),
        PromptChoice::Save => match model.document.file_path.clone() {
            Some(path) => match save_to(model, &path) {
                Ok(()) => {
                    model.ui.set_status(format!("Saved: {}", path.display()));
                    proceed(model, action)
                }
                // A failed save aborts the pending action
                Err(cmd) => Some(cmd),
            },
            None => {
                model.ui.after_save = Some(action);
                Some(save_as_dialog(model))
            }
        },
    }
}
