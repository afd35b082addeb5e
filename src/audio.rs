//! Audio output.
//!
//! `AudioEngine` is the narrow playback capability the controller drives;
//! `RodioEngine` implements it on top of a `rodio` sink.

mod engine;
mod rodio_engine;
mod sink;

pub use engine::AudioEngine;
pub use rodio_engine::RodioEngine;

#[cfg(test)]
mod tests;
