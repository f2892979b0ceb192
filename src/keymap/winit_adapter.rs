//! Adapter to convert winit key events to our Keystroke type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Convert winit key event data to a Keystroke.
///
/// Returns None for keys the keymap has no name for. When the logical key
/// is a control character (some platforms report Ctrl+S as U+0013), the
/// physical letter key is used instead.
pub fn keystroke_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool,
) -> Option<Keystroke> {
    let mods = Modifiers::new(ctrl, shift, alt, logo);

    let key_code = match logical_key {
        Key::Named(named) => named_key(*named),
        Key::Character(s) => s
            .chars()
            .next()
            .filter(|c| !c.is_control())
            .map(|c| KeyCode::Char(c.to_ascii_lowercase())),
        _ => None,
    };

    key_code
        .or_else(|| physical_letter(physical_key))
        .map(|key| Keystroke::new(key, mods))
}

fn named_key(named: NamedKey) -> Option<KeyCode> {
    let code = match named {
        NamedKey::Enter => KeyCode::Enter,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Delete => KeyCode::Delete,
        NamedKey::Space => KeyCode::Space,

        NamedKey::ArrowUp => KeyCode::Up,
        NamedKey::ArrowDown => KeyCode::Down,
        NamedKey::ArrowLeft => KeyCode::Left,
        NamedKey::ArrowRight => KeyCode::Right,

        NamedKey::Home => KeyCode::Home,
        NamedKey::End => KeyCode::End,
        NamedKey::PageUp => KeyCode::PageUp,
        NamedKey::PageDown => KeyCode::PageDown,

        NamedKey::F1 => KeyCode::F(1),
        NamedKey::F2 => KeyCode::F(2),
        NamedKey::F3 => KeyCode::F(3),
        NamedKey::F4 => KeyCode::F(4),
        NamedKey::F5 => KeyCode::F(5),
        NamedKey::F6 => KeyCode::F(6),
        NamedKey::F7 => KeyCode::F(7),
        NamedKey::F8 => KeyCode::F(8),
        NamedKey::F9 => KeyCode::F(9),
        NamedKey::F10 => KeyCode::F(10),
        NamedKey::F11 => KeyCode::F(11),
        NamedKey::F12 => KeyCode::F(12),

        _ => return None,
    };
    Some(code)
}

fn physical_letter(physical_key: PhysicalKey) -> Option<KeyCode> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };
    let letter = match code {
        WinitKeyCode::KeyA => 'a',
        WinitKeyCode::KeyB => 'b',
        WinitKeyCode::KeyC => 'c',
        WinitKeyCode::KeyD => 'd',
        WinitKeyCode::KeyE => 'e',
        WinitKeyCode::KeyF => 'f',
        WinitKeyCode::KeyG => 'g',
        WinitKeyCode::KeyH => 'h',
        WinitKeyCode::KeyI => 'i',
        WinitKeyCode::KeyJ => 'j',
        WinitKeyCode::KeyK => 'k',
        WinitKeyCode::KeyL => 'l',
        WinitKeyCode::KeyM => 'm',
        WinitKeyCode::KeyN => 'n',
        WinitKeyCode::KeyO => 'o',
        WinitKeyCode::KeyP => 'p',
        WinitKeyCode::KeyQ => 'q',
        WinitKeyCode::KeyR => 'r',
        WinitKeyCode::KeyS => 's',
        WinitKeyCode::KeyT => 't',
        WinitKeyCode::KeyU => 'u',
        WinitKeyCode::KeyV => 'v',
        WinitKeyCode::KeyW => 'w',
        WinitKeyCode::KeyX => 'x',
        WinitKeyCode::KeyY => 'y',
        WinitKeyCode::KeyZ => 'z',
        _ => return None,
    };
    Some(KeyCode::Char(letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let stroke = keystroke_from_winit(
            &Key::Character("s".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            true,
            false,
            false,
            false,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('s'));
        assert!(stroke.mods.ctrl());
        assert!(!stroke.mods.shift());
    }

    #[test]
    fn test_uppercase_normalized() {
        let stroke = keystroke_from_winit(
            &Key::Character("S".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            true,
            true,
            false,
            false,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('s'));
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_control_character_falls_back_to_physical() {
        let stroke = keystroke_from_winit(
            &Key::Character("\u{13}".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            true,
            false,
            false,
            false,
        )
        .expect("should map");

        assert_eq!(stroke.key, KeyCode::Char('s'));
    }

    #[test]
    fn test_named_keys() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::F1),
            PhysicalKey::Code(WinitKeyCode::F1),
            false,
            false,
            false,
            false,
        )
        .expect("should map");
        assert_eq!(stroke.key, KeyCode::F(1));
        assert!(stroke.mods.is_empty());

        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::ArrowLeft),
            PhysicalKey::Code(WinitKeyCode::ArrowLeft),
            false,
            true,
            false,
            false,
        )
        .expect("should map");
        assert_eq!(stroke.key, KeyCode::Left);
        assert!(stroke.mods.shift());
    }

    #[test]
    fn test_unknown_key() {
        let stroke = keystroke_from_winit(
            &Key::Named(NamedKey::CapsLock),
            PhysicalKey::Code(WinitKeyCode::CapsLock),
            false,
            false,
            false,
            false,
        );
        assert_eq!(stroke, None);
    }
}
