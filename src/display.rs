//! Text-mode "now playing" screen.
//!
//! `model` holds the fixed set of lines, `progress` derives the bar and time
//! readout, `render` lays a model out for a given terminal size and `surface`
//! writes finished frames to the terminal.

mod model;
mod progress;
mod render;
mod surface;

pub use model::*;
pub use progress::*;
pub use render::*;
pub use surface::*;
