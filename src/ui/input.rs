//! Keystroke classification.
//!
//! Turns raw crossterm key events into the handful of keys the game cares
//! about. Only Press events count: Release and Repeat events (reported when
//! keyboard enhancement is active, and on Windows) are dropped so one
//! physical press is one key.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Commit the buffered letter.
    Commit,
    /// Leave the game.
    Quit,
    /// Any printable character; the controller decides if it is a guess.
    Char(char),
    /// Anything else.
    Other,
}

#[derive(Clone, Debug)]
pub struct KeyBindings {
    commit: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Build bindings from config key names. Names that are unknown, or
    /// that would shadow a guessable letter (a-z), are skipped and
    /// described in the returned warnings.
    pub fn from_names(commit: &[String], quit: &[String]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let mut parse_all = |names: &[String]| -> Vec<KeyCode> {
            names.iter()
                .filter_map(|n| match parse_key_name(n) {
                    None => {
                        warnings.push(format!("unknown key name {n:?}, ignored"));
                        None
                    }
                    Some(KeyCode::Char(c)) if c.is_ascii_lowercase() => {
                        warnings.push(format!("key {n:?} is a guessable letter, ignored"));
                        None
                    }
                    code => code,
                })
                .collect()
        };
        let mut commit = parse_all(commit);
        let quit = parse_all(quit);
        if commit.is_empty() {
            commit.push(KeyCode::Enter);
        }
        (KeyBindings { commit, quit }, warnings)
    }

    /// `None` for events that are not key presses.
    pub fn classify(&self, key: KeyEvent) -> Option<Key> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Some(Key::Quit);
        }
        if self.commit.contains(&key.code) {
            return Some(Key::Commit);
        }
        if self.quit.contains(&key.code) {
            return Some(Key::Quit);
        }
        Some(match key.code {
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        })
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            commit: vec![KeyCode::Enter],
            quit: vec![KeyCode::Esc],
        }
    }
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "space" => KeyCode::Char(' '),
        "delete" | "del" => KeyCode::Delete,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|s| s.parse::<u8>().ok()) {
                if (1..=12).contains(&n) {
                    return Some(KeyCode::F(n));
                }
                return None;
            }
            let mut chars = name.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}
