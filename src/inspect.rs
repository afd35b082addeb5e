//! Track duration lookup.

use std::path::Path;

use lofty::prelude::AudioFile;

use crate::error::PlayerError;

pub trait MediaInspector {
    /// Length of the audio stream in `path`, in milliseconds.
    fn duration_ms(&self, path: &Path) -> Result<u64, PlayerError>;
}

/// Reads durations from file properties via `lofty`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyInspector;

impl MediaInspector for LoftyInspector {
    fn duration_ms(&self, path: &Path) -> Result<u64, PlayerError> {
        let tagged = lofty::read_from_path(path).map_err(|e| PlayerError::Inspection {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let millis = tagged.properties().duration().as_millis();
        Ok(u64::try_from(millis).unwrap_or(u64::MAX))
    }
}
