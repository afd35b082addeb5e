use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/termplay/config.toml` or `~/.config/termplay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TERMPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub ui: UiSettings,
    pub keys: KeySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Screen refreshes per second. The progress offset advances in steps of
    /// one refresh interval.
    pub fps: u32,
    /// Fraction of the track length skipped per seek key press.
    pub seek_fraction: f64,
    /// Two presses of the delete key within this many milliseconds delete the
    /// current track.
    pub delete_window_ms: u64,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl PlayerSettings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            fps: 2,
            seek_fraction: 0.025,
            delete_window_ms: 500,
            extensions: vec![
                "mp3".into(),
                "wav".into(),
                "ogg".into(),
                "flac".into(),
                "opus".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Width of the centered content box, in columns.
    pub box_width: usize,
    /// Draw frames without clearing the terminal in between.
    pub no_clear: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            box_width: 46,
            no_clear: false,
        }
    }
}

/// Key names: a single character, or one of `space`, `tab`, `esc`, `enter`,
/// `left`, `right`, `up`, `down`, `f1`..`f12`, ...
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeySettings {
    pub pause: String,
    pub seek_backward: String,
    pub seek_forward: String,
    pub next: String,
    pub stop: String,
    /// Letter pressed twice to delete the current track.
    pub delete: String,
    pub debounce: DebounceSetting,
}

impl Default for KeySettings {
    fn default() -> Self {
        Self {
            pause: "space".to_string(),
            seek_backward: "left".to_string(),
            seek_forward: "right".to_string(),
            next: "tab".to_string(),
            stop: "esc".to_string(),
            delete: "d".to_string(),
            debounce: DebounceSetting::EventKind,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DebounceSetting {
    #[serde(alias = "event_kind", alias = "press")]
    EventKind,
    #[serde(alias = "toggle")]
    Parity,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file. Defaults to `termplay.log` in the system temp directory.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "termplay=info".to_string(),
        }
    }
}
