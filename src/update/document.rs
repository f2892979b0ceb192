//! Text editing, undo/redo and clipboard on the document

use crate::commands::{Cmd, PasteTarget};
use crate::messages::DocumentMsg;
use crate::model::AppModel;

pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    let editable = &mut model.document.editable;

    match msg {
        DocumentMsg::InsertChar(ch) => {
            let changed = editable.insert_char(ch);
            after_edit(model, changed)
        }
        DocumentMsg::InsertNewline => {
            let changed = editable.insert_char('\n');
            after_edit(model, changed)
        }
        DocumentMsg::DeleteBackward => {
            let changed = editable.delete_backward();
            after_edit(model, changed)
        }
        DocumentMsg::DeleteForward => {
            let changed = editable.delete_forward();
            after_edit(model, changed)
        }

        DocumentMsg::Undo => {
            let changed = editable.undo();
            if !changed {
                tracing::debug!("Nothing to undo");
            }
            after_edit(model, changed)
        }
        DocumentMsg::Redo => {
            let changed = editable.redo();
            if !changed {
                tracing::debug!("Nothing to redo");
            }
            after_edit(model, changed)
        }

        DocumentMsg::Copy => {
            if !editable.has_selection() {
                return None;
            }
            Some(Cmd::CopyToClipboard(editable.selected_text()))
        }
        DocumentMsg::Cut => {
            let cut = editable.delete_selection()?;
            Cmd::join(Some(Cmd::CopyToClipboard(cut)), after_edit(model, true))
        }
        DocumentMsg::Paste => Some(Cmd::ReadClipboard {
            target: PasteTarget::Document,
        }),
        DocumentMsg::PasteText(text) => {
            let changed = editable.insert_text(&text);
            after_edit(model, changed)
        }

        DocumentMsg::SelectAll => {
            editable.select_all();
            model.ensure_cursor_visible();
            Some(Cmd::Redraw)
        }
    }
}

/// Bookkeeping after a buffer mutation: dirty flag, stale highlights, scroll
fn after_edit(model: &mut AppModel, changed: bool) -> Option<Cmd> {
    if !changed {
        return None;
    }
    model.document.mark_modified();
    model.clear_highlights();
    model.ensure_cursor_visible();
    Some(Cmd::Redraw)
}
