//! In-memory stand-ins for the audio engine, the media inspector and the
//! terminal, shared by the unit tests.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audio::AudioEngine;
use crate::display::{Frame, Surface};
use crate::error::PlayerError;
use crate::inspect::MediaInspector;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Load(PathBuf),
    Play(Duration),
    Pause,
    Unpause,
    Stop,
    Rewind,
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub calls: Vec<EngineCall>,
    /// Paths whose `load` fails.
    pub broken: HashSet<PathBuf>,
    /// Pretend the loaded track has drained.
    pub finished: bool,
    /// Make `rewind` fail, as it does once the file is gone from disk.
    pub rewind_fails: bool,
    loaded: Option<PathBuf>,
    sounding: bool,
    paused: bool,
}

impl FakeEngine {
    pub fn broken<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        Self {
            broken: paths.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn loaded(&self) -> Option<&Path> {
        self.loaded.as_deref()
    }

    pub fn last_call(&self) -> Option<&EngineCall> {
        self.calls.last()
    }
}

impl AudioEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.calls.push(EngineCall::Load(path.to_path_buf()));
        if self.broken.contains(path) {
            return Err(PlayerError::Load {
                path: path.to_path_buf(),
                reason: "unsupported".to_string(),
            });
        }
        self.loaded = Some(path.to_path_buf());
        self.sounding = false;
        Ok(())
    }

    fn play(&mut self, start: Duration) -> Result<(), PlayerError> {
        self.calls.push(EngineCall::Play(start));
        self.sounding = self.loaded.is_some();
        self.paused = false;
        self.finished = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.push(EngineCall::Pause);
        self.paused = true;
    }

    fn unpause(&mut self) {
        self.calls.push(EngineCall::Unpause);
        self.paused = false;
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
        self.sounding = false;
    }

    fn rewind(&mut self) -> Result<(), PlayerError> {
        self.calls.push(EngineCall::Rewind);
        if self.rewind_fails {
            return Err(PlayerError::Load {
                path: self.loaded.clone().unwrap_or_default(),
                reason: "file vanished".to_string(),
            });
        }
        self.sounding = self.loaded.is_some();
        self.finished = false;
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.sounding && !self.paused && !self.finished
    }

    fn is_finished(&self) -> bool {
        self.sounding && !self.paused && self.finished
    }
}

/// Durations by path; unknown paths fail inspection.
#[derive(Debug, Default, Clone)]
pub struct FakeInspector {
    durations: HashMap<PathBuf, u64>,
}

impl FakeInspector {
    pub fn with(mut self, path: impl Into<PathBuf>, duration_ms: u64) -> Self {
        self.durations.insert(path.into(), duration_ms);
        self
    }
}

impl MediaInspector for FakeInspector {
    fn duration_ms(&self, path: &Path) -> Result<u64, PlayerError> {
        self.durations
            .get(path)
            .copied()
            .ok_or_else(|| PlayerError::Inspection {
                path: path.to_path_buf(),
                reason: "no audio stream".to_string(),
            })
    }
}

#[derive(Debug)]
pub struct FakeSurface {
    pub cols: u16,
    pub rows: u16,
    pub frames: Vec<Frame>,
    pub clears: usize,
    pub cursor_visible: bool,
}

impl FakeSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            frames: Vec::new(),
            clears: 0,
            cursor_visible: true,
        }
    }
}

impl Surface for FakeSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.cols, self.rows))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.cursor_visible = true;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
