//! YAML configuration parsing for keymaps
//!
//! Parses keymap.yaml files into Keybinding structs.

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::command::Command;
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a keymap YAML file
#[derive(Debug, Deserialize)]
pub struct KeymapConfig {
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub command: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub when: Option<Vec<Condition>>,
}

/// Errors that can occur when loading keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    IoError(String),
    ParseError(String),
    InvalidKey(String),
    InvalidCommand(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::IoError(e) => write!(f, "IO error: {}", e),
            KeymapError::ParseError(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidCommand(c) => write!(f, "Invalid command: {}", c),
        }
    }
}

impl std::error::Error for KeymapError {}

/// Load keybindings from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Vec<Keybinding>, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::IoError(e.to_string()))?;
    parse_keymap_yaml(&content)
}

/// Parse keybindings from a YAML string, skipping entries for other platforms
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let config: KeymapConfig =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::ParseError(e.to_string()))?;

    let platform = current_platform();
    let mut bindings = Vec::with_capacity(config.bindings.len());

    for entry in config.bindings {
        if entry.platform.as_deref().is_some_and(|p| p != platform) {
            continue;
        }

        let keystroke = parse_key_string(&entry.key)?;
        let command: Command = entry
            .command
            .parse()
            .map_err(|_| KeymapError::InvalidCommand(entry.command.clone()))?;

        let mut binding = Keybinding::new(keystroke, command);
        if let Some(conditions) = entry.when {
            binding = binding.when(conditions);
        }
        bindings.push(binding);
    }

    Ok(bindings)
}

/// Parse a key string like "cmd+shift+s" into a Keystroke.
///
/// `cmd` is the platform command key (Cmd on macOS, Ctrl elsewhere).
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in key_str.split('+') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "cmd" => mods = mods | Modifiers::cmd(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ if key.is_some() => {
                return Err(KeymapError::InvalidKey(format!(
                    "Multiple keys in binding: {}",
                    key_str
                )));
            }
            _ => key = Some(parse_key_code(&part)?),
        }
    }

    let key =
        key.ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;
    Ok(Keystroke::new(key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),

        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

fn current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_strings() {
        let stroke = parse_key_string("ctrl+shift+s").unwrap();
        assert_eq!(stroke.key, KeyCode::Char('s'));
        assert_eq!(stroke.mods, Modifiers::CTRL | Modifiers::SHIFT);

        assert_eq!(parse_key_string("F1").unwrap().key, KeyCode::F(1));
        assert_eq!(parse_key_string("pgdn").unwrap().key, KeyCode::PageDown);
        assert_eq!(parse_key_string("cmd+z").unwrap().mods, Modifiers::cmd());
    }

    #[test]
    fn test_parse_key_errors() {
        assert!(matches!(parse_key_string("ctrl+a+b"), Err(KeymapError::InvalidKey(_))));
        assert!(matches!(parse_key_string("ctrl+shift"), Err(KeymapError::InvalidKey(_))));
        assert!(matches!(parse_key_string("f99"), Err(KeymapError::InvalidKey(_))));
        assert!(matches!(parse_key_string("hyper"), Err(KeymapError::InvalidKey(_))));
    }

    #[test]
    fn test_parse_yaml_with_conditions() {
        let yaml = r#"
bindings:
  - key: enter
    command: RunSearch
    when: [search_focused]
  - key: enter
    command: InsertNewline
"#;
        let bindings = parse_keymap_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].when, Some(vec![Condition::SearchFocused]));
        assert_eq!(bindings[1].command, Command::InsertNewline);
    }

    #[test]
    fn test_parse_yaml_rejects_unknown_command() {
        let yaml = "bindings:\n  - key: ctrl+k\n    command: Teleport\n";
        assert_eq!(
            parse_keymap_yaml(yaml),
            Err(KeymapError::InvalidCommand("Teleport".to_string()))
        );
    }

    #[test]
    fn test_parse_yaml_skips_other_platforms() {
        let yaml = r#"
bindings:
  - key: ctrl+q
    command: Quit
    platform: no-such-os
"#;
        assert!(parse_keymap_yaml(yaml).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        assert!(matches!(
            parse_keymap_yaml("bindings: [unclosed"),
            Err(KeymapError::ParseError(_))
        ));
    }
}
