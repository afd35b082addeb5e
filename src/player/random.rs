//! Random sibling selection for continuous playback.

use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::PlayerError;
use crate::storage::Storage;

/// Directory holding `path`, or the working directory for a bare file name.
pub(super) fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub(super) fn has_audio_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Pick a uniformly random audio file next to `current`, excluding it.
///
/// Falls back to `current` itself when it is the only audio file left in the
/// directory.
pub(super) fn pick_sibling<S, R>(
    storage: &S,
    current: &Path,
    extensions: &[String],
    rng: &mut R,
) -> Result<PathBuf, PlayerError>
where
    S: Storage + ?Sized,
    R: Rng + ?Sized,
{
    let dir = parent_dir(current);
    let current_name = current.file_name();

    let names = storage
        .list_directory(&dir)
        .map_err(|source| PlayerError::ListDirectory {
            dir: dir.clone(),
            source,
        })?;

    let mut current_listed = false;
    let mut candidates = Vec::with_capacity(names.len());
    for name in names {
        if Some(name.as_os_str()) == current_name {
            current_listed = true;
        } else if has_audio_extension(Path::new(&name), extensions) {
            candidates.push(name);
        }
    }

    if let Some(name) = candidates.choose(rng) {
        return Ok(dir.join(name));
    }
    if current_listed {
        return Ok(current.to_path_buf());
    }
    Err(PlayerError::EmptyDirectory { dir })
}
