//! Filesystem access used by random-advance and delete.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

pub trait Storage {
    /// File names (not paths) of the regular files directly inside `dir`.
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
        {
            let entry = entry.map_err(io::Error::other)?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_os_string());
            }
        }
        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn list_directory_returns_only_direct_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("deep.mp3"), b"x").unwrap();

        let mut names = FsStorage.list_directory(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("a.mp3"), OsString::from("notes.txt")]);
    }

    #[test]
    fn list_directory_fails_for_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(FsStorage.list_directory(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn remove_file_fails_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.mp3");
        fs::write(&path, b"x").unwrap();

        FsStorage.remove_file(&path).unwrap();
        assert!(!path.exists());
        assert!(FsStorage.remove_file(&path).is_err());
    }
}
