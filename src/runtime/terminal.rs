use std::io::{self, stdout};

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};

/// Raw mode + alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    event_types: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;

        // Where the terminal can tell presses from repeats and releases, ask
        // it to, so held keys are not mistaken for new presses.
        let event_types = supports_keyboard_enhancement().unwrap_or(false);
        if event_types {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }

        Ok(Self { event_types })
    }

    /// Whether key events carry a real press/repeat/release kind.
    pub fn reports_event_types(&self) -> bool {
        self.event_types
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.event_types {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}
