use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use super::engine::AudioEngine;
use super::sink::{create_sink_at, open_source};
use crate::error::PlayerError;

/// `AudioEngine` backed by the default output device.
///
/// Seeking replaces the sink with a fresh one that skips into the file, so
/// the engine keeps only the path of the loaded track.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
}

impl RodioEngine {
    pub fn open_default() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
        })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        // Probe before touching the current sink so a bad file leaves it playing.
        open_source(path, Duration::ZERO)?;

        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    fn play(&mut self, start: Duration) -> Result<(), PlayerError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let new_sink = create_sink_at(&self.stream, path, start)?;
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        new_sink.play();
        self.sink = Some(new_sink);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(ref s) = self.sink {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(ref s) = self.sink {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn rewind(&mut self) -> Result<(), PlayerError> {
        self.play(Duration::ZERO)
    }

    fn is_active(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && !s.empty())
    }

    fn is_finished(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|s| !s.is_paused() && s.empty())
    }
}
