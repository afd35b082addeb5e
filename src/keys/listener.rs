use std::io;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use super::bindings::KeyBindings;
use super::debounce::{DebounceMode, Debouncer, DeleteGesture, RepeatFilter};
use crate::command::Command;

/// Turns key events into commands. Holds all per-key state of the listener.
#[derive(Debug)]
pub struct KeyInterpreter {
    bindings: KeyBindings,
    debouncer: Debouncer,
    repeats: Option<RepeatFilter>,
    delete: DeleteGesture,
}

impl KeyInterpreter {
    pub fn new(bindings: KeyBindings, mode: DebounceMode, delete_window: Duration) -> Self {
        Self {
            bindings,
            debouncer: Debouncer::new(mode),
            repeats: None,
            delete: DeleteGesture::new(delete_window),
        }
    }

    /// Also drop same-key presses closer together than `window`.
    pub fn with_repeat_filter(mut self, window: Duration) -> Self {
        self.repeats = Some(RepeatFilter::new(window));
        self
    }

    pub fn interpret(&mut self, key: KeyEvent, now: Instant) -> Option<Command> {
        if !self.debouncer.accept(&key) {
            return None;
        }
        if let Some(repeats) = &mut self.repeats {
            if !repeats.accept(key.code, now) {
                return None;
            }
        }

        // Raw mode swallows SIGINT, so Ctrl+C is always a way out.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.delete.reset();
            return Some(Command::Stop);
        }

        if key.code == KeyCode::Char(self.bindings.delete) {
            return self
                .delete
                .press(now)
                .then_some(Command::DeleteAndAdvance);
        }

        self.delete.reset();
        self.bindings.command_for(key.code)
    }
}

/// Listener loop over an arbitrary blocking event source.
///
/// Returns after forwarding `Command::Stop`, when the receiving side hangs
/// up, or when the event source fails.
pub fn listen<F>(mut next_event: F, mut interpreter: KeyInterpreter, tx: Sender<Command>)
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match next_event() {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "terminal input failed, stopping");
                let _ = tx.send(Command::Stop);
                return;
            }
        };

        let cmd = match event {
            Event::Key(key) => interpreter.interpret(key, Instant::now()),
            Event::Resize(cols, rows) => Some(Command::Resize(cols, rows)),
            _ => None,
        };
        let Some(cmd) = cmd else {
            continue;
        };

        debug!(?cmd, "key command");
        if tx.send(cmd).is_err() || cmd == Command::Stop {
            return;
        }
    }
}

/// Spawn the listener on a background thread reading crossterm events.
pub fn spawn_listener(interpreter: KeyInterpreter, tx: Sender<Command>) -> JoinHandle<()> {
    thread::spawn(move || listen(event::read, interpreter, tx))
}
