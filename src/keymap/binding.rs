//! A keystroke bound to a command, optionally guarded by conditions

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: Command,
    /// Conditions that must all hold for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self {
            keystroke,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    pub fn is_conditional(&self) -> bool {
        self.when.is_some()
    }

    pub fn display_string(&self) -> String {
        self.keystroke.display_string()
    }
}
