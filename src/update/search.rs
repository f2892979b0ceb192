//! Search bar: editing the term and running the search

use crate::commands::{Cmd, PasteTarget};
use crate::messages::{Direction, SearchMsg};
use crate::model::{AppModel, SearchBarState};
use crate::search::find_all;

pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::Open => {
            match model.ui.search.as_mut() {
                Some(search) => search.focused = true,
                None => {
                    model.ui.search = Some(SearchBarState::new());
                    model.recompute_viewport();
                }
            }
            Some(Cmd::Redraw)
        }
        SearchMsg::Close => {
            model.ui.search.take()?;
            model.clear_highlights();
            model.recompute_viewport();
            Some(Cmd::Redraw)
        }
        SearchMsg::Run => run_search(model),
        _ => edit_term(model, msg),
    }
}

fn edit_term(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    let search = model.ui.search.as_mut()?;
    let input = &mut search.input;

    match msg {
        SearchMsg::InsertChar(ch) => {
            if ch == '\n' || ch == '\r' {
                return None;
            }
            input.insert_char(ch);
        }
        SearchMsg::Paste => {
            return Some(Cmd::ReadClipboard {
                target: PasteTarget::SearchBar,
            })
        }
        SearchMsg::InsertText(text) => {
            // The term is a single line
            let line = text.lines().next().unwrap_or_default();
            input.insert_text(line);
        }
        SearchMsg::DeleteBackward => {
            input.delete_backward();
        }
        SearchMsg::DeleteForward => {
            input.delete_forward();
        }
        SearchMsg::MoveCursor(Direction::Left) => input.move_left(false),
        SearchMsg::MoveCursor(Direction::Right) => input.move_right(false),
        SearchMsg::MoveCursor(_) => return None,
        SearchMsg::MoveCursorStart => input.move_line_start(false),
        SearchMsg::MoveCursorEnd => input.move_line_end(false),
        SearchMsg::ToggleCaseSensitive => search.case_sensitive = !search.case_sensitive,
        SearchMsg::Blur => search.focused = false,
        SearchMsg::Open | SearchMsg::Close | SearchMsg::Run => return None,
    }
    Some(Cmd::Redraw)
}

/// Highlight every match of the trimmed term and put the caret on the first
fn run_search(model: &mut AppModel) -> Option<Cmd> {
    let search = model.ui.search.as_mut()?;
    let term = search.term();
    let term = term.trim();

    let result = find_all(&model.document.text(), term, search.case_sensitive);
    search.last_outcome = Some(result.outcome);

    if let Some(first) = result.first() {
        model.document.editable.set_caret_offset(first.start, false);
        model.ensure_cursor_visible();
    }
    model.search_highlights = result.matches;
    Some(Cmd::Redraw)
}
