//! Utilities for opening tracks and creating `rodio` sinks from them.
//!
//! The helpers here encapsulate opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::PlayerError;

/// Open and decode `path`, positioned at `start_at`.
pub(super) fn open_source(
    path: &Path,
    start_at: Duration,
) -> Result<impl Source + Send + 'static, PlayerError> {
    let load_err = |reason: String| PlayerError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_err(e.to_string()))?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| load_err(e.to_string()))?;

    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    Ok(source.skip_duration(start_at))
}

/// Create a paused `Sink` for `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    path: &Path,
    start_at: Duration,
) -> Result<Sink, PlayerError> {
    let source = open_source(path, start_at)?;

    let sink = Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.pause();
    Ok(sink)
}
