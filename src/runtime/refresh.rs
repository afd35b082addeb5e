use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::audio::AudioEngine;
use crate::command::Command;
use crate::display::{RenderMode, Renderer, Surface};
use crate::error::PlayerError;
use crate::inspect::MediaInspector;
use crate::player::{PlaybackController, PlaybackState, SeekDirection};
use crate::storage::Storage;

/// Main control loop: the only owner of the controller and the terminal.
///
/// Redraws on a fixed interval and right after every command. Commands come
/// from the key listener; a `Resize` redraws at the new geometry at once.
pub struct RefreshLoop<E, I, S, T> {
    controller: PlaybackController<E, I, S>,
    surface: T,
    renderer: Renderer,
    interval: Duration,
}

impl<E, I, S, T> RefreshLoop<E, I, S, T>
where
    E: AudioEngine,
    I: MediaInspector,
    S: Storage,
    T: Surface,
{
    pub fn new(
        controller: PlaybackController<E, I, S>,
        surface: T,
        renderer: Renderer,
        interval: Duration,
    ) -> Self {
        Self {
            controller,
            surface,
            renderer,
            interval,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &PlaybackController<E, I, S> {
        &self.controller
    }

    #[cfg(test)]
    pub fn surface(&self) -> &T {
        &self.surface
    }

    /// Run until playback stops or the command channel hangs up.
    pub fn run(&mut self, commands: &Receiver<Command>) -> Result<(), PlayerError> {
        self.surface.hide_cursor()?;
        let result = self.drive(commands);
        self.surface.show_cursor()?;
        result
    }

    fn drive(&mut self, commands: &Receiver<Command>) -> Result<(), PlayerError> {
        let interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX);

        while self.controller.state() != PlaybackState::Stopped {
            self.redraw()?;

            let deadline = Instant::now() + self.interval;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                if wait.is_zero() {
                    break;
                }
                match commands.recv_timeout(wait) {
                    Ok(cmd) => {
                        self.handle(cmd)?;
                        if self.controller.state() == PlaybackState::Stopped {
                            return Ok(());
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => {
                        self.controller.stop();
                        return Ok(());
                    }
                }
            }

            if let Some(advance) = self.controller.tick(interval_ms) {
                debug!(?advance, "track ended");
            }
        }
        Ok(())
    }

    fn handle(&mut self, cmd: Command) -> Result<(), PlayerError> {
        debug!(?cmd, "apply");
        match cmd {
            Command::Resize(cols, rows) => return self.redraw_at(cols, rows),
            Command::TogglePause => self.controller.toggle_pause(),
            Command::SeekBackward => self.seek(SeekDirection::Backward),
            Command::SeekForward => self.seek(SeekDirection::Forward),
            Command::Next => {
                self.controller.advance_random();
            }
            Command::DeleteAndAdvance => {
                if let Err(e) = self.controller.delete_current_and_advance() {
                    warn!(error = %e, "delete failed, playback continues");
                }
            }
            Command::Stop => {
                self.controller.stop();
                return Ok(());
            }
        }
        self.redraw()
    }

    fn seek(&mut self, direction: SeekDirection) {
        if let Err(e) = self.controller.seek_step(direction) {
            warn!(error = %e, "seek dropped");
        }
    }

    fn redraw(&mut self) -> Result<(), PlayerError> {
        let (cols, rows) = self.surface.size()?;
        self.redraw_at(cols, rows)
    }

    fn redraw_at(&mut self, cols: u16, rows: u16) -> Result<(), PlayerError> {
        self.controller
            .refresh_progress(self.renderer.content_width(cols));
        let frame = self
            .renderer
            .render(&self.controller.display().lines(), cols, rows);

        if self.renderer.mode() == RenderMode::Standard {
            self.surface.clear()?;
        }
        self.surface.draw(&frame)?;
        Ok(())
    }
}
