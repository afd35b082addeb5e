use crossterm::event::KeyCode;

use crate::command::Command;
use crate::config::KeySettings;

/// Resolved keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub pause: KeyCode,
    pub seek_backward: KeyCode,
    pub seek_forward: KeyCode,
    pub next: KeyCode,
    pub stop: KeyCode,
    /// Pressed twice in quick succession to delete the current track.
    pub delete: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pause: KeyCode::Char(' '),
            seek_backward: KeyCode::Left,
            seek_forward: KeyCode::Right,
            next: KeyCode::Tab,
            stop: KeyCode::Esc,
            delete: 'd',
        }
    }
}

impl KeyBindings {
    pub fn from_settings(keys: &KeySettings) -> Result<Self, String> {
        let delete = match parse_key(&keys.delete)? {
            KeyCode::Char(c) if c.is_alphabetic() => c,
            _ => return Err(format!("keys.delete must be a letter, got {:?}", keys.delete)),
        };

        Ok(Self {
            pause: parse_key(&keys.pause)?,
            seek_backward: parse_key(&keys.seek_backward)?,
            seek_forward: parse_key(&keys.seek_forward)?,
            next: parse_key(&keys.next)?,
            stop: parse_key(&keys.stop)?,
            delete,
        })
    }

    /// Command bound to `code`, not counting the delete gesture.
    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        if code == self.pause {
            Some(Command::TogglePause)
        } else if code == self.seek_backward {
            Some(Command::SeekBackward)
        } else if code == self.seek_forward {
            Some(Command::SeekForward)
        } else if code == self.next {
            Some(Command::Next)
        } else if code == self.stop {
            Some(Command::Stop)
        } else {
            None
        }
    }

    /// One-line key legend shown under the logo.
    pub fn legend(&self) -> String {
        let delete = self.delete.to_ascii_uppercase();
        [
            key_label(self.pause),
            key_label(self.seek_backward),
            key_label(self.seek_forward),
            key_label(self.next),
            key_label(self.stop),
            format!("{delete}{delete}"),
        ]
        .join("    ")
    }
}

/// Parse a key name from the config file.
///
/// Accepts single characters and the names `space`, `tab`, `esc`, `enter`,
/// `backspace`, `left`, `right`, `up`, `down`, `home`, `end`, `pageup`,
/// `pagedown`, `delete` and `f1`..`f12` (case-insensitive).
pub fn parse_key(name: &str) -> Result<KeyCode, String> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = name.trim().to_ascii_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" | "del" => KeyCode::Delete,
        f if f.starts_with('f') => match f[1..].parse::<u8>() {
            Ok(n @ 1..=12) => KeyCode::F(n),
            _ => return Err(format!("unknown key name {name:?}")),
        },
        _ => return Err(format!("unknown key name {name:?}")),
    };
    Ok(code)
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "SPACE".to_string(),
        KeyCode::Char(c) => c.to_uppercase().to_string(),
        KeyCode::Tab => "TAB".to_string(),
        KeyCode::Esc => "ESC".to_string(),
        KeyCode::Enter => "ENTER".to_string(),
        KeyCode::Backspace => "BKSP".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Home => "HOME".to_string(),
        KeyCode::End => "END".to_string(),
        KeyCode::PageUp => "PGUP".to_string(),
        KeyCode::PageDown => "PGDN".to_string(),
        KeyCode::Delete => "DEL".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}
