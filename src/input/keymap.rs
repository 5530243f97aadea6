use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;

use crate::error::{DemoError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Normalize a terminal event so it can be looked up in a keymap.
    /// Shift is folded into the character for printable keys.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if let KeyCode::Char(c) = event.code {
            modifiers.remove(KeyModifiers::SHIFT);
            let c = if modifiers.contains(KeyModifiers::CONTROL) {
                c.to_ascii_lowercase()
            } else {
                c
            };
            return Self::new(KeyCode::Char(c), modifiers);
        }
        Self::new(event.code, modifiers)
    }

    /// Parse Vim-style notation: `x`, `<C-n>`, `<A-p>`, `<M-p>`, `<S-Tab>`,
    /// `<F5>`, `<C-F2>`
    pub fn parse(notation: &str) -> Result<Self> {
        let invalid = || DemoError::InvalidKey(notation.to_string());

        let inner = match notation.strip_prefix('<').and_then(|n| n.strip_suffix('>')) {
            Some(inner) => inner,
            None => {
                let mut chars = notation.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::char(c)),
                    _ => Err(invalid()),
                };
            }
        };

        let mut modifiers = KeyModifiers::NONE;
        let mut rest = inner;
        while let Some((prefix, tail)) = rest.split_once('-') {
            if tail.is_empty() {
                // `<C-->` binds the minus key
                break;
            }
            modifiers |= match prefix.to_ascii_uppercase().as_str() {
                "C" => KeyModifiers::CONTROL,
                "A" | "M" => KeyModifiers::ALT,
                "S" => KeyModifiers::SHIFT,
                _ => return Err(invalid()),
            };
            rest = tail;
        }

        let code = named_key(rest).ok_or_else(invalid)?;
        let key = match code {
            KeyCode::Char(c) => {
                modifiers.remove(KeyModifiers::SHIFT);
                let c = if modifiers.contains(KeyModifiers::CONTROL) {
                    c.to_ascii_lowercase()
                } else {
                    c
                };
                Self::new(KeyCode::Char(c), modifiers)
            }
            code => Self::new(code, modifiers),
        };
        Ok(key)
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "lt" => KeyCode::Char('<'),
        _ => {
            let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

/// User keybinds: a key runs a whole command line immediately
#[derive(Debug, Default)]
pub struct Keymap {
    bindings: HashMap<Key, String>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config keybinds, skipping entries that do not parse
    pub fn from_bindings(bindings: &HashMap<String, String>) -> Self {
        let mut keymap = Self::new();
        for (notation, command) in bindings {
            if let Err(e) = keymap.bind(notation, command) {
                warn!("skipping keybind: {}", e);
            }
        }
        keymap
    }

    pub fn bind(&mut self, notation: &str, command: &str) -> Result<()> {
        let key = Key::parse(notation)?;
        self.bindings.insert(key, command.to_string());
        Ok(())
    }

    pub fn lookup(&self, key: &Key) -> Option<&str> {
        self.bindings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_char() {
        assert_eq!(Key::parse("x").unwrap(), Key::char('x'));
    }

    #[test]
    fn parses_ctrl_notation() {
        assert_eq!(Key::parse("<C-n>").unwrap(), Key::ctrl('n'));
        assert_eq!(Key::parse("<c-N>").unwrap(), Key::ctrl('n'));
    }

    #[test]
    fn parses_alt_and_meta_alike() {
        let alt = Key::new(KeyCode::Char('p'), KeyModifiers::ALT);
        assert_eq!(Key::parse("<A-p>").unwrap(), alt);
        assert_eq!(Key::parse("<M-p>").unwrap(), alt);
    }

    #[test]
    fn parses_function_and_named_keys() {
        assert_eq!(
            Key::parse("<F5>").unwrap(),
            Key::new(KeyCode::F(5), KeyModifiers::NONE)
        );
        assert_eq!(
            Key::parse("<C-F12>").unwrap(),
            Key::new(KeyCode::F(12), KeyModifiers::CONTROL)
        );
        assert_eq!(
            Key::parse("<S-Tab>").unwrap(),
            Key::new(KeyCode::Tab, KeyModifiers::SHIFT)
        );
    }

    #[test]
    fn parses_minus_with_modifier() {
        assert_eq!(Key::parse("<C-->").unwrap(), Key::ctrl('-'));
    }

    #[test]
    fn rejects_bad_notation() {
        for bad in ["", "ab", "<X-q>", "<F13>", "<C->", "<nope>"] {
            assert!(
                matches!(Key::parse(bad), Err(DemoError::InvalidKey(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn event_normalization_matches_parsed_key() {
        let event = KeyEvent::new(
            KeyCode::Char('N'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(Key::from_event(&event), Key::parse("<C-n>").unwrap());
    }

    #[test]
    fn keymap_skips_invalid_bindings() {
        let mut bindings = HashMap::new();
        bindings.insert("<C-n>".to_string(), ":FkThemeNext".to_string());
        bindings.insert("<Q-x>".to_string(), "help".to_string());

        let keymap = Keymap::from_bindings(&bindings);
        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap.lookup(&Key::ctrl('n')), Some(":FkThemeNext"));
    }
}
