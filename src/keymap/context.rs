//! Focus context for conditional keybindings
//!
//! The same key can mean different things depending on where keyboard focus
//! is: Backspace edits the search term while the search bar is focused and
//! the document otherwise.

use serde::Deserialize;

use crate::messages::{DocumentMsg, Msg, SearchMsg};
use crate::model::AppModel;

/// Focus state extracted from the model for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// The search bar is open and receives typed text
    pub search_focused: bool,
    /// The search bar is open (focused or not)
    pub search_open: bool,
    /// A menu dropdown is open
    pub menu_open: bool,
}

impl KeyContext {
    pub fn from_model(model: &AppModel) -> Self {
        let search = model.ui.search.as_ref();
        Self {
            search_focused: search.is_some_and(|s| s.focused),
            search_open: search.is_some(),
            menu_open: model.ui.open_menu.is_some(),
        }
    }

    /// Message for a typed character, routed to whatever has focus
    pub fn text_input(&self, ch: char) -> Msg {
        if self.search_focused {
            Msg::Search(SearchMsg::InsertChar(ch))
        } else {
            Msg::Document(DocumentMsg::InsertChar(ch))
        }
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    SearchFocused,
    SearchOpen,
    MenuOpen,
    /// The document (not the search bar) receives typed text
    EditorFocused,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::SearchFocused => ctx.search_focused,
            Condition::SearchOpen => ctx.search_open,
            Condition::MenuOpen => ctx.menu_open,
            Condition::EditorFocused => !ctx.search_focused,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
