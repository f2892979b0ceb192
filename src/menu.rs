//! Static menu bar registry
//!
//! Every item carries the same `Command` its shortcut is bound to, so menu
//! clicks go through `Command::to_msgs` like key presses do.

use crate::keymap::{Command, Keymap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Action {
        label: &'static str,
        command: Command,
    },
    Separator,
}

impl MenuItem {
    const fn action(label: &'static str, command: Command) -> Self {
        MenuItem::Action { label, command }
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            MenuItem::Action { command, .. } => Some(*command),
            MenuItem::Separator => None,
        }
    }

    /// Label drawn in the dropdown; empty for separators
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Action { label, .. } => label,
            MenuItem::Separator => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENUS: &[Menu] = &[
    Menu {
        title: "File",
        items: &[
            MenuItem::action("New", Command::NewFile),
            MenuItem::action("Open...", Command::OpenFile),
            MenuItem::action("Save", Command::SaveFile),
            MenuItem::action("Save As...", Command::SaveFileAs),
            MenuItem::Separator,
            MenuItem::action("Search...", Command::OpenSearch),
            MenuItem::Separator,
            MenuItem::action("Exit", Command::Quit),
        ],
    },
    Menu {
        title: "Edit",
        items: &[
            MenuItem::action("Undo", Command::Undo),
            MenuItem::action("Redo", Command::Redo),
            MenuItem::Separator,
            MenuItem::action("Copy", Command::Copy),
            MenuItem::action("Cut", Command::Cut),
            MenuItem::action("Paste", Command::Paste),
            MenuItem::Separator,
            MenuItem::action("Select All", Command::SelectAll),
        ],
    },
    Menu {
        title: "Encoding",
        items: &[
            MenuItem::action("UTF-8", Command::SetEncodingUtf8),
            MenuItem::action("Latin-1", Command::SetEncodingLatin1),
            MenuItem::action("UTF-16", Command::SetEncodingUtf16),
        ],
    },
    Menu {
        title: "Help",
        items: &[
            MenuItem::action("Information", Command::ShowInformation),
            MenuItem::action("User Manual", Command::OpenManual),
            MenuItem::Separator,
            MenuItem::action("Members", Command::ShowMembers),
        ],
    },
];

/// Item `item` of menu `menu`, if both exist
pub fn item(menu: usize, item: usize) -> Option<&'static MenuItem> {
    MENUS.get(menu)?.items.get(item)
}

/// Shortcut text shown right-aligned next to a menu item
pub fn accelerator(keymap: &Keymap, item: &MenuItem) -> Option<String> {
    item.command().and_then(|command| keymap.display_for(command))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{default_bindings, Keymap};

    #[test]
    fn test_item_lookup() {
        assert_eq!(item(0, 0).and_then(MenuItem::command), Some(Command::NewFile));
        assert_eq!(item(0, 4), Some(&MenuItem::Separator));
        assert_eq!(item(0, 99), None);
        assert_eq!(item(99, 0), None);
    }

    #[test]
    fn test_every_menu_has_actions() {
        for menu in MENUS {
            assert!(menu.items.iter().any(|i| i.command().is_some()), "{}", menu.title);
        }
    }

    #[test]
    fn test_accelerators_from_keymap() {
        let keymap = Keymap::with_bindings(default_bindings());
        let save_as = MenuItem::action("Save As...", Command::SaveFileAs);
        assert!(accelerator(&keymap, &save_as).is_some());
        assert_eq!(accelerator(&keymap, &MenuItem::Separator), None);
    }
}
