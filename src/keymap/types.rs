//! Keystroke building blocks: modifier flags and key codes

use std::fmt;

/// Held modifier keys, packed into a byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, the Windows/Super key elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        Modifiers(ctrl as u8 | (shift as u8) << 1 | (alt as u8) << 2 | (meta as u8) << 3)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL.0 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT.0 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT.0 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & Self::META.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Only Shift (or nothing) is held, so the key produces plain text
    #[inline]
    pub const fn is_text_input(self) -> bool {
        self.0 & !Self::SHIFT.0 == 0
    }

    /// The platform "command" modifier: Cmd on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

/// A key, independent of the modifiers held with it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, stored lowercase
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PageUp,
    PageDown,

    /// F1-F24
    F(u8),
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Escape => f.write_str("Esc"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Delete => f.write_str("Del"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::PageUp => f.write_str("PageUp"),
            KeyCode::PageDown => f.write_str("PageDown"),
            KeyCode::F(n) => write!(f, "F{}", n),
        }
    }
}

/// A key pressed together with a set of modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Character key; letters are folded to lowercase
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Accelerator text shown next to menu items, e.g. `Ctrl+Shift+S`
    pub fn display_string(&self) -> String {
        let mut out = String::new();
        if cfg!(target_os = "macos") {
            for (held, symbol) in [
                (self.mods.ctrl(), "⌃"),
                (self.mods.alt(), "⌥"),
                (self.mods.shift(), "⇧"),
                (self.mods.meta(), "⌘"),
            ] {
                if held {
                    out.push_str(symbol);
                }
            }
        } else {
            for (held, name) in [
                (self.mods.ctrl(), "Ctrl+"),
                (self.mods.alt(), "Alt+"),
                (self.mods.shift(), "Shift+"),
                (self.mods.meta(), "Win+"),
            ] {
                if held {
                    out.push_str(name);
                }
            }
        }
        out.push_str(&self.key.to_string());
        out
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}
