//! Keyboard control.
//!
//! The listener runs on its own thread, turns raw terminal events into
//! `Command`s and hands them to the refresh loop over a channel.

mod bindings;
mod debounce;
mod listener;

pub use bindings::*;
pub use debounce::*;
pub use listener::*;
