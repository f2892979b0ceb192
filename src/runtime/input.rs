//! Keyboard input handling
//!
//! Bound keystrokes go through the keymap (`Command` → messages). Anything
//! the keymap does not claim is treated as typed text and routed to
//! whatever has focus: the search bar or the document.

use winit::event::KeyEvent;
use winit::keyboard::ModifiersState;

use quill::commands::Cmd;
use quill::keymap::{keystroke_from_winit, KeyContext, Keymap, Keystroke, Modifiers};
use quill::model::AppModel;
use quill::update::{dispatch_command, update};

/// Handle a key press from winit
pub fn handle_key(
    model: &mut AppModel,
    keymap: &Keymap,
    event: &KeyEvent,
    modifiers: ModifiersState,
) -> Option<Cmd> {
    let mods = Modifiers::new(
        modifiers.control_key(),
        modifiers.shift_key(),
        modifiers.alt_key(),
        modifiers.super_key(),
    );
    let keystroke = keystroke_from_winit(
        &event.logical_key,
        event.physical_key,
        mods.ctrl(),
        mods.shift(),
        mods.alt(),
        mods.meta(),
    );
    handle_key_input(model, keymap, keystroke, event.text.as_deref(), mods)
}

/// Keymap lookup first, then text input
pub fn handle_key_input(
    model: &mut AppModel,
    keymap: &Keymap,
    keystroke: Option<Keystroke>,
    text: Option<&str>,
    mods: Modifiers,
) -> Option<Cmd> {
    let context = KeyContext::from_model(model);

    if let Some(keystroke) = keystroke {
        if let Some(command) = keymap.lookup(&keystroke, &context) {
            tracing::trace!("{} -> {:?}", keystroke, command);
            return dispatch_command(model, command);
        }
    }

    // Unbound shortcuts never type. Ctrl+Alt is AltGr on some layouts.
    if (mods.ctrl() && !mods.alt()) || mods.meta() {
        return None;
    }

    let mut result = None;
    for ch in text?.chars().filter(|c| !c.is_control()) {
        result = Cmd::join(result, update(model, context.text_input(ch)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill::config::EditorConfig;
    use quill::keymap::{default_bindings, KeyCode};
    use quill::messages::{Msg, SearchMsg};

    fn setup(text: &str) -> (AppModel, Keymap) {
        let mut model = AppModel::new(EditorConfig::default(), 800, 600);
        model.document.editable.set_content(text);
        (model, Keymap::with_bindings(default_bindings()))
    }

    fn type_text(model: &mut AppModel, keymap: &Keymap, text: &str) {
        for ch in text.chars() {
            let keystroke = Keystroke::new(KeyCode::Char(ch.to_ascii_lowercase()), Modifiers::NONE);
            handle_key_input(
                model,
                keymap,
                Some(keystroke),
                Some(&ch.to_string()),
                Modifiers::NONE,
            );
        }
    }

    #[test]
    fn test_typing_goes_to_document() {
        let (mut model, keymap) = setup("");
        type_text(&mut model, &keymap, "hi");
        assert_eq!(model.document.text(), "hi");
        assert!(model.document.is_modified);
    }

    #[test]
    fn test_typing_goes_to_focused_search_bar() {
        let (mut model, keymap) = setup("abc");
        update(&mut model, Msg::Search(SearchMsg::Open));

        type_text(&mut model, &keymap, "bc");
        let backspace = Keystroke::new(KeyCode::Backspace, Modifiers::NONE);
        handle_key_input(&mut model, &keymap, Some(backspace), None, Modifiers::NONE);

        assert_eq!(model.ui.search.as_ref().unwrap().term(), "b");
        assert_eq!(model.document.text(), "abc");
        assert!(!model.document.is_modified);
    }

    #[test]
    fn test_enter_runs_search_when_focused() {
        let (mut model, keymap) = setup("one two one");
        update(&mut model, Msg::Search(SearchMsg::Open));
        type_text(&mut model, &keymap, "one");

        let enter = Keystroke::new(KeyCode::Enter, Modifiers::NONE);
        handle_key_input(&mut model, &keymap, Some(enter), Some("\r"), Modifiers::NONE);

        assert_eq!(model.search_highlights.len(), 2);
        assert_eq!(model.document.text(), "one two one");
    }

    #[test]
    fn test_unbound_ctrl_chord_does_not_type() {
        let (mut model, keymap) = setup("");
        let ctrl_k = Keystroke::new(KeyCode::Char('k'), Modifiers::CTRL);
        let cmd = handle_key_input(&mut model, &keymap, Some(ctrl_k), Some("k"), Modifiers::CTRL);
        assert!(cmd.is_none());
        assert_eq!(model.document.text(), "");
    }

    #[test]
    fn test_escape_closes_menu_before_search() {
        let (mut model, keymap) = setup("");
        update(&mut model, Msg::Search(SearchMsg::Open));
        model.ui.open_menu = Some(1);

        let escape = Keystroke::new(KeyCode::Escape, Modifiers::NONE);
        handle_key_input(&mut model, &keymap, Some(escape), None, Modifiers::NONE);
        assert_eq!(model.ui.open_menu, None);
        assert!(model.ui.search_open());

        handle_key_input(&mut model, &keymap, Some(escape), None, Modifiers::NONE);
        assert!(!model.ui.search_open());
    }

    #[test]
    fn test_save_shortcut_on_untitled_asks_for_path() {
        let (mut model, keymap) = setup("");
        let save = Keystroke::new(KeyCode::Char('s'), Modifiers::cmd());
        let cmd = handle_key_input(&mut model, &keymap, Some(save), None, Modifiers::cmd());
        let cmds = cmd.map(Cmd::flatten).unwrap_or_default();
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Cmd::ShowSaveFileDialog { .. })));
    }
}
