//! Progress bar and time readout derivation.
//!
//! Everything here is a pure function of `(offset_ms, duration_ms, width)`.

use std::time::Duration;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Fraction of the track played, in `[0, 1]`.
///
/// The total is taken in whole seconds with a floor of one second so a
/// zero-length or uninspectable track never divides by zero.
pub fn progress_ratio(offset_ms: u64, duration_ms: u64) -> f64 {
    let elapsed = offset_ms as f64 / 1000.0;
    let total = (duration_ms / 1000).max(1) as f64;
    (elapsed / total).clamp(0.0, 1.0)
}

/// Bar of `width` glyphs, filled proportionally. Truncates, never rounds up.
pub fn progress_bar(offset_ms: u64, duration_ms: u64, width: usize) -> String {
    let filled = ((width as f64 * progress_ratio(offset_ms, duration_ms)) as usize).min(width);

    let mut bar = String::with_capacity(width * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar
}

/// `elapsed` on the left half, `total` on the right half of `width` columns.
pub fn time_readout(offset_ms: u64, duration_ms: u64, width: usize) -> String {
    let half = width / 2;
    let elapsed = format_mmss(Duration::from_millis(offset_ms));
    let total = format_mmss(Duration::from_millis(duration_ms));
    format!("{elapsed:<half$}{total:>half$}")
}

/// Format a `Duration` as `MM:SS`. Minutes are not wrapped at the hour.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
