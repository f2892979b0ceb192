//! Default keybindings for the editor
//!
//! The shipped bindings live in keymap.yaml at the project root and are
//! embedded at compile time. A hardcoded copy is used if that file ever
//! fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::keymap::Keymap;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Build the keymap: embedded defaults, then `<config dir>/quill/keymap.yaml`
pub fn load_default_keymap() -> Keymap {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    Keymap::with_bindings(bindings)
}

/// Merge user bindings into base bindings
///
/// - same keystroke and conditions: the user binding replaces the base one
/// - command `Unbound`: every base binding for that keystroke is removed
/// - otherwise the user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke && b.when == user_binding.when)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded equivalent of the embedded keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let shift = Modifiers::SHIFT;
    let ctrl = Modifiers::CTRL;
    let ctrl_shift = Modifiers::CTRL | Modifiers::SHIFT;
    let none = Modifiers::NONE;
    let search = vec![Condition::SearchFocused];

    vec![
        bind(KeyCode::Char('n'), cmd, Command::NewFile),
        bind(KeyCode::Char('o'), cmd, Command::OpenFile),
        bind(KeyCode::Char('s'), cmd, Command::SaveFile),
        bind(KeyCode::Char('s'), cmd_shift, Command::SaveFileAs),
        bind(KeyCode::Char('q'), cmd, Command::Quit),
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('y'), cmd, Command::Redo),
        bind(KeyCode::Char('z'), cmd_shift, Command::Redo),
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('x'), cmd, Command::Cut),
        bind(KeyCode::Char('v'), cmd, Command::SearchPaste).when(search.clone()),
        bind(KeyCode::Char('v'), cmd, Command::Paste),
        bind(KeyCode::Char('a'), cmd, Command::SelectAll),
        bind(KeyCode::Char('f'), cmd, Command::OpenSearch),
        bind(KeyCode::Char('c'), Modifiers::ALT, Command::ToggleSearchCase)
            .when(vec![Condition::SearchOpen]),
        bind(KeyCode::Enter, none, Command::RunSearch).when(search.clone()),
        bind(KeyCode::Backspace, none, Command::SearchDeleteBackward).when(search.clone()),
        bind(KeyCode::Delete, none, Command::SearchDeleteForward).when(search.clone()),
        bind(KeyCode::Left, none, Command::SearchCursorLeft).when(search.clone()),
        bind(KeyCode::Right, none, Command::SearchCursorRight).when(search.clone()),
        bind(KeyCode::Home, none, Command::SearchCursorStart).when(search.clone()),
        bind(KeyCode::End, none, Command::SearchCursorEnd).when(search.clone()),
        bind(KeyCode::Tab, none, Command::FocusEditor).when(search),
        bind(KeyCode::Escape, none, Command::CloseMenu).when(vec![Condition::MenuOpen]),
        bind(KeyCode::Escape, none, Command::CloseSearch).when(vec![Condition::SearchOpen]),
        bind(KeyCode::F(1), none, Command::ShowInformation),
        bind(KeyCode::Enter, none, Command::InsertNewline),
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Tab, none, Command::InsertTab),
        bind(KeyCode::Up, none, Command::MoveCursorUp),
        bind(KeyCode::Down, none, Command::MoveCursorDown),
        bind(KeyCode::Left, none, Command::MoveCursorLeft),
        bind(KeyCode::Right, none, Command::MoveCursorRight),
        bind(KeyCode::Home, none, Command::MoveCursorLineStart),
        bind(KeyCode::End, none, Command::MoveCursorLineEnd),
        bind(KeyCode::Home, ctrl, Command::MoveCursorDocumentStart),
        bind(KeyCode::End, ctrl, Command::MoveCursorDocumentEnd),
        bind(KeyCode::PageUp, none, Command::PageUp),
        bind(KeyCode::PageDown, none, Command::PageDown),
        bind(KeyCode::Up, shift, Command::MoveCursorUpWithSelection),
        bind(KeyCode::Down, shift, Command::MoveCursorDownWithSelection),
        bind(KeyCode::Left, shift, Command::MoveCursorLeftWithSelection),
        bind(KeyCode::Right, shift, Command::MoveCursorRightWithSelection),
        bind(KeyCode::Home, shift, Command::MoveCursorLineStartWithSelection),
        bind(KeyCode::End, shift, Command::MoveCursorLineEndWithSelection),
        bind(KeyCode::Home, ctrl_shift, Command::MoveCursorDocumentStartWithSelection),
        bind(KeyCode::End, ctrl_shift, Command::MoveCursorDocumentEndWithSelection),
        bind(KeyCode::PageUp, shift, Command::PageUpWithSelection),
        bind(KeyCode::PageDown, shift, Command::PageDownWithSelection),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
