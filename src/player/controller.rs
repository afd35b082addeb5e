use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::random::pick_sibling;
use super::state::{Advance, PlaybackState, SeekDirection};
use crate::audio::AudioEngine;
use crate::display::{DisplayModel, Transport, progress_bar, time_readout};
use crate::error::PlayerError;
use crate::inspect::MediaInspector;
use crate::storage::Storage;

/// Shortest duration a loaded track is given, so progress always has a
/// denominator and the offset can move.
const MIN_DURATION_MS: u64 = 1_000;

/// Tunables for the controller, usually taken from `[player]` settings.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Fraction of the track duration skipped per seek step.
    pub seek_fraction: f64,
    /// Extensions (without dot) considered by random-advance.
    pub extensions: Vec<String>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            seek_fraction: 0.025,
            extensions: ["mp3", "wav", "ogg", "flac", "opus"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Owns the current track, its offset and duration, and the screen model.
pub struct PlaybackController<E, I, S> {
    engine: E,
    inspector: I,
    storage: S,
    options: ControllerOptions,
    rng: StdRng,

    track: Option<PathBuf>,
    duration_ms: u64,
    offset_ms: u64,
    state: PlaybackState,
    display: DisplayModel,
}

impl<E, I, S> PlaybackController<E, I, S>
where
    E: AudioEngine,
    I: MediaInspector,
    S: Storage,
{
    pub fn new(
        engine: E,
        inspector: I,
        storage: S,
        options: ControllerOptions,
        display: DisplayModel,
    ) -> Self {
        Self {
            engine,
            inspector,
            storage,
            options,
            rng: StdRng::from_os_rng(),
            track: None,
            duration_ms: 0,
            offset_ms: 0,
            state: PlaybackState::Stopped,
            display,
        }
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[cfg(test)]
    pub fn track(&self) -> Option<&Path> {
        self.track.as_deref()
    }

    #[cfg(test)]
    pub fn offset_ms(&self) -> u64 {
        self.offset_ms
    }

    #[cfg(test)]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn display(&self) -> &DisplayModel {
        &self.display
    }

    #[cfg(test)]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Initial load. On failure the player stays `Stopped` and the error is
    /// returned for the caller to report.
    pub fn start(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.load_and_play(path).inspect_err(|_| {
            self.state = PlaybackState::Stopped;
        })
    }

    /// Load `path`, play it from the start and retitle the screen.
    pub fn load_and_play(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.engine.load(path)?;
        self.engine.play(Duration::ZERO)?;

        let duration_ms = self.inspector.duration_ms(path).unwrap_or_else(|e| {
            warn!(error = %e, "duration unavailable, using a 1s floor");
            0
        });
        self.duration_ms = duration_ms.max(MIN_DURATION_MS);
        self.track = Some(path.to_path_buf());
        self.offset_ms = 0;
        self.state = PlaybackState::Playing;

        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.display.set_title(title);
        self.display.set_transport(Transport::Playing);

        info!(track = %path.display(), duration_ms = self.duration_ms, "playing");
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                self.engine.pause();
                self.display.set_transport(Transport::Paused);
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                self.engine.unpause();
                self.display.set_transport(Transport::Playing);
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Stopped => {}
        }
    }

    /// Seek one step, sized as a fraction of the track's duration.
    ///
    /// The duration is read again from the file, so a track removed behind our
    /// back surfaces here as an `Inspection` error and nothing changes.
    pub fn seek_step(&mut self, direction: SeekDirection) -> Result<(), PlayerError> {
        let Some(track) = self.track.as_deref() else {
            return Ok(());
        };
        if self.state == PlaybackState::Stopped {
            return Ok(());
        }

        let duration = self.inspector.duration_ms(track)?;
        let step = (duration as f64 * self.options.seek_fraction) as i64;
        let delta = match direction {
            SeekDirection::Backward => -step,
            SeekDirection::Forward => step,
        };
        self.seek(delta)
    }

    /// Move the offset by `delta_ms`, clamped to the track, and resume playing
    /// from there.
    pub fn seek(&mut self, delta_ms: i64) -> Result<(), PlayerError> {
        if self.track.is_none() || self.state == PlaybackState::Stopped {
            return Ok(());
        }

        let target = (self.offset_ms as i64).saturating_add(delta_ms);
        let target = target.clamp(0, self.duration_ms as i64) as u64;

        self.engine.play(Duration::from_millis(target))?;
        self.offset_ms = target;
        self.state = PlaybackState::Playing;
        self.display.set_transport(Transport::Playing);
        debug!(offset_ms = target, "seek");
        Ok(())
    }

    /// Continue with a random sibling of the current track.
    ///
    /// Never fails: any problem finding or loading the next file falls back to
    /// restarting the current one.
    pub fn advance_random(&mut self) -> Advance {
        if self.state == PlaybackState::Stopped {
            return Advance::Idle;
        }
        let Some(current) = self.track.clone() else {
            return Advance::Idle;
        };

        let next = match pick_sibling(
            &self.storage,
            &current,
            &self.options.extensions,
            &mut self.rng,
        ) {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "no next track, restarting current");
                return self.restart_current();
            }
        };

        match self.load_and_play(&next) {
            Ok(()) if next == current => Advance::Replayed,
            Ok(()) => Advance::Advanced(next),
            Err(e) => {
                warn!(error = %e, "next track failed to load, restarting current");
                self.restart_current()
            }
        }
    }

    /// Delete the current file, then advance. A failed delete leaves playback
    /// untouched.
    pub fn delete_current_and_advance(&mut self) -> Result<Advance, PlayerError> {
        if self.state == PlaybackState::Stopped {
            return Ok(Advance::Idle);
        }
        let Some(current) = self.track.clone() else {
            return Ok(Advance::Idle);
        };

        self.storage
            .remove_file(&current)
            .map_err(|source| PlayerError::Delete {
                path: current.clone(),
                source,
            })?;
        info!(track = %current.display(), "deleted");

        Ok(self.advance_random())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.state = PlaybackState::Stopped;
    }

    /// Account for `interval_ms` of wall time having passed.
    ///
    /// The offset only moves while the engine is audibly playing. A track that
    /// ran out on its own is followed by a random-advance.
    pub fn tick(&mut self, interval_ms: u64) -> Option<Advance> {
        match self.state {
            PlaybackState::Stopped => None,
            _ if self.engine.is_active() => {
                self.offset_ms = self.offset_ms.saturating_add(interval_ms).min(self.duration_ms);
                None
            }
            PlaybackState::Playing if self.engine.is_finished() => Some(self.advance_random()),
            _ => None,
        }
    }

    /// Recompute the bar and time readout for a box `width` columns wide.
    pub fn refresh_progress(&mut self, width: usize) {
        let bar = progress_bar(self.offset_ms, self.duration_ms, width);
        let readout = time_readout(self.offset_ms, self.duration_ms, width);
        self.display.set_progress(bar, readout);
    }

    fn restart_current(&mut self) -> Advance {
        if let Err(e) = self.engine.rewind() {
            // The file is gone or unreadable. Silence the engine so it stops
            // reporting a finished track, and leave the offset where it was.
            warn!(error = %e, "rewind failed, output stopped");
            self.engine.stop();
            return Advance::Stalled;
        }
        self.engine.unpause();
        self.offset_ms = 0;
        self.state = PlaybackState::Playing;
        self.display.set_transport(Transport::Playing);
        Advance::Restarted
    }
}
