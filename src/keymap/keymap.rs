//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;

/// All active keybindings with a per-keystroke index
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Indices into `bindings`. Several bindings may share a keystroke
    /// with different conditions.
    lookup: HashMap<Keystroke, Vec<usize>>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Find the command for a keystroke in the given focus context.
    ///
    /// Bindings whose conditions all hold win over unconditional ones;
    /// within each group the first registered binding wins.
    pub fn lookup(&self, keystroke: &Keystroke, context: &KeyContext) -> Option<Command> {
        let indices = self.lookup.get(keystroke)?;

        let conditional = indices.iter().map(|&i| &self.bindings[i]).find(|b| {
            b.when
                .as_deref()
                .is_some_and(|conds| Condition::evaluate_all(conds, context))
        });
        if let Some(binding) = conditional {
            return Some(binding.command);
        }

        indices
            .iter()
            .map(|&i| &self.bindings[i])
            .find(|b| b.when.is_none())
            .map(|b| b.command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// First unconditional binding for a command
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings
            .iter()
            .find(|b| b.command == command && b.when.is_none())
    }

    /// Accelerator text for a command, e.g. for menu items
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(Keybinding::display_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl(c: char) -> Keystroke {
        Keystroke::char_with_mods(c, Modifiers::CTRL)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl('s'), Command::SaveFile)]);
        let ctx = KeyContext::default();

        assert_eq!(keymap.lookup(&ctrl('s'), &ctx), Some(Command::SaveFile));
        assert_eq!(keymap.lookup(&ctrl('k'), &ctx), None);
    }

    #[test]
    fn test_conditional_binding_wins_when_active() {
        let enter = Keystroke::key(KeyCode::Enter);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(enter, Command::InsertNewline),
            Keybinding::new(enter, Command::RunSearch).when(vec![Condition::SearchFocused]),
        ]);

        let editor = KeyContext::default();
        let search = KeyContext {
            search_focused: true,
            search_open: true,
            menu_open: false,
        };
        assert_eq!(keymap.lookup(&enter, &editor), Some(Command::InsertNewline));
        assert_eq!(keymap.lookup(&enter, &search), Some(Command::RunSearch));
    }

    #[test]
    fn test_conditional_only_binding_needs_context() {
        let esc = Keystroke::key(KeyCode::Escape);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(esc, Command::CloseMenu).when(vec![Condition::MenuOpen])
        ]);
        assert_eq!(keymap.lookup(&esc, &KeyContext::default()), None);
    }

    #[test]
    fn test_display_for_skips_conditional() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl('v'), Command::SearchPaste).when(vec![Condition::SearchFocused]),
            Keybinding::new(ctrl('v'), Command::Paste),
        ]);
        assert!(keymap.display_for(Command::Paste).is_some());
        assert_eq!(keymap.display_for(Command::SearchPaste), None);
        assert_eq!(keymap.len(), 2);
    }
}
