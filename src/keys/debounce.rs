use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// How key events are filtered before being interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DebounceMode {
    /// Act on `Press` only. Auto-repeat (`Repeat`) and `Release` are dropped,
    /// so holding a key down triggers it once.
    EventKind,
    /// Act on every other event per key, starting with the first. For input
    /// layers that report a press and a release without telling them apart.
    Parity,
}

impl Default for DebounceMode {
    fn default() -> Self {
        Self::EventKind
    }
}

#[derive(Debug, Default)]
pub struct Debouncer {
    mode: DebounceMode,
    seen: HashMap<KeyCode, u64>,
}

impl Debouncer {
    pub fn new(mode: DebounceMode) -> Self {
        Self {
            mode,
            seen: HashMap::new(),
        }
    }

    /// Whether `event` should be acted on.
    pub fn accept(&mut self, event: &KeyEvent) -> bool {
        match self.mode {
            DebounceMode::EventKind => event.kind == KeyEventKind::Press,
            DebounceMode::Parity => {
                let count = self.seen.entry(event.code).or_insert(0);
                *count += 1;
                *count % 2 == 1
            }
        }
    }
}

/// How close together two presses of one key must be to count as terminal
/// auto-repeat rather than typing.
pub const AUTO_REPEAT_WINDOW: Duration = Duration::from_millis(60);

/// Drops presses of a key that follow the previous one within `window`.
///
/// Terminals without keyboard enhancement report a held key as a stream of
/// `Press` events; this is what keeps `EventKind` from acting on each one.
/// The first repeat after the terminal's initial repeat delay still gets
/// through.
#[derive(Debug)]
pub struct RepeatFilter {
    window: Duration,
    last: HashMap<KeyCode, Instant>,
}

impl RepeatFilter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: HashMap::new(),
        }
    }

    pub fn accept(&mut self, code: KeyCode, now: Instant) -> bool {
        let previous = self.last.insert(code, now);
        !previous.is_some_and(|at| now.saturating_duration_since(at) < self.window)
    }
}

/// Double-press confirmation for destructive keys.
#[derive(Debug)]
pub struct DeleteGesture {
    window: Duration,
    armed_at: Option<Instant>,
}

impl DeleteGesture {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_at: None,
        }
    }

    /// Register a press at `now`. Returns `true` when it completes a double
    /// press inside the window; otherwise arms the gesture.
    pub fn press(&mut self, now: Instant) -> bool {
        match self.armed_at.take() {
            Some(at) if now.saturating_duration_since(at) < self.window => true,
            _ => {
                self.armed_at = Some(now);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.armed_at = None;
    }
}
