use std::path::PathBuf;

/// The playback state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// Outcome of a random-advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// A different sibling was loaded.
    Advanced(PathBuf),
    /// The current file was the only candidate and was loaded again.
    Replayed,
    /// Nothing new could be loaded; the current track was rewound instead.
    Restarted,
    /// The current track could not even be rewound; output is silent until
    /// the user stops or moves on.
    Stalled,
    /// Nothing to advance from.
    Idle,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}
