/// State changes submitted to the refresh loop by the key listener.
///
/// The refresh loop is the only owner of playback state; everything else
/// talks to it through a channel of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    SeekBackward,
    SeekForward,
    /// Jump to a random sibling of the current track.
    Next,
    /// Confirmed double-press: delete the current file, then advance.
    DeleteAndAdvance,
    Stop,
    /// Terminal geometry changed to `(columns, rows)`.
    Resize(u16, u16),
}
