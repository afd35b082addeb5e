use std::path::Path;
use std::time::Duration;

use crate::error::PlayerError;

/// Single-track playback device.
///
/// Only the playback controller calls into an engine.
pub trait AudioEngine {
    /// Make `path` the current track. Fails with `PlayerError::Load` when the
    /// file is missing or cannot be decoded; the previous track stays loaded.
    fn load(&mut self, path: &Path) -> Result<(), PlayerError>;

    /// Start the loaded track from `start`.
    fn play(&mut self, start: Duration) -> Result<(), PlayerError>;

    fn pause(&mut self);

    fn unpause(&mut self);

    fn stop(&mut self);

    /// Restart the loaded track from the beginning.
    fn rewind(&mut self) -> Result<(), PlayerError>;

    /// Audio is currently coming out (not paused, not drained).
    fn is_active(&self) -> bool;

    /// The track played through to its end without being paused or stopped.
    fn is_finished(&self) -> bool;
}
