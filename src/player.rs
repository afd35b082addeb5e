//! Playback control: the state machine that owns the current track.
//!
//! `PlaybackController` is the single owner of the track, the offset and the
//! screen model; the refresh loop drives it with commands and ticks.

mod controller;
mod random;
mod state;

pub use controller::*;
pub use state::*;

#[cfg(test)]
mod tests;
