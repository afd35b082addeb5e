//! Error taxonomy for the player core.
//!
//! Only an initial load failure and terminal failures end the program; every
//! other variant is recovered from inside the control loop.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The file is missing or cannot be decoded.
    #[error("cannot load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// The file has no readable audio stream to take a duration from.
    #[error("cannot read duration of {}: {reason}", path.display())]
    Inspection { path: PathBuf, reason: String },

    /// Random-advance found no playable candidates.
    #[error("no playable files in {}", dir.display())]
    EmptyDirectory { dir: PathBuf },

    #[error("cannot list {}: {source}", dir.display())]
    ListDirectory {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot delete {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No audio output device could be opened.
    #[error("no audio output device: {0}")]
    Output(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
