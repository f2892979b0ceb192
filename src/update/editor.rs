//! Caret movement and scrolling

use crate::commands::Cmd;
use crate::editable::Position;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    let page = model.page_lines();
    let editable = &mut model.document.editable;

    match msg {
        EditorMsg::MoveCursor(direction) => move_cursor(model, direction, false),
        EditorMsg::MoveCursorWithSelection(direction) => move_cursor(model, direction, true),

        EditorMsg::MoveCursorLineStart => editable.move_line_start(false),
        EditorMsg::MoveCursorLineEnd => editable.move_line_end(false),
        EditorMsg::MoveCursorDocumentStart => editable.move_document_start(false),
        EditorMsg::MoveCursorDocumentEnd => editable.move_document_end(false),
        EditorMsg::MoveCursorLineStartWithSelection => editable.move_line_start(true),
        EditorMsg::MoveCursorLineEndWithSelection => editable.move_line_end(true),
        EditorMsg::MoveCursorDocumentStartWithSelection => editable.move_document_start(true),
        EditorMsg::MoveCursorDocumentEndWithSelection => editable.move_document_end(true),

        EditorMsg::PageUp | EditorMsg::PageUpWithSelection => {
            editable.move_lines_up(page, msg == EditorMsg::PageUpWithSelection);
            model.scroll_lines(-(page as i32));
        }
        EditorMsg::PageDown | EditorMsg::PageDownWithSelection => {
            editable.move_lines_down(page, msg == EditorMsg::PageDownWithSelection);
            model.scroll_lines(page as i32);
        }

        EditorMsg::SetCursorPosition { line, column } => {
            editable.set_caret(Position::new(line, column), false);
            blur_search(model);
        }
        EditorMsg::ExtendSelectionToPosition { line, column } => {
            editable.set_caret(Position::new(line, column), true);
            blur_search(model);
        }

        EditorMsg::Scroll(delta) => {
            model.scroll_lines(delta);
            return Some(Cmd::Redraw);
        }
    }

    model.ensure_cursor_visible();
    Some(Cmd::Redraw)
}

fn move_cursor(model: &mut AppModel, direction: Direction, extend: bool) {
    let editable = &mut model.document.editable;
    match direction {
        Direction::Up => editable.move_up(extend),
        Direction::Down => editable.move_down(extend),
        Direction::Left => editable.move_left(extend),
        Direction::Right => editable.move_right(extend),
    }
}

/// Clicking into the text gives keyboard focus back to the document
fn blur_search(model: &mut AppModel) {
    if let Some(search) = model.ui.search.as_mut() {
        search.focused = false;
    }
}
