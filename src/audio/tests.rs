use std::fs;
use std::time::Duration;

use tempfile::tempdir;

use super::sink::open_source;
use crate::error::PlayerError;

#[test]
fn open_source_reports_missing_file_as_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.mp3");

    match open_source(&path, Duration::ZERO) {
        Err(PlayerError::Load { path: p, .. }) => assert_eq!(p, path),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("missing file decoded"),
    }
}

#[test]
fn open_source_rejects_undecodable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fake.mp3");
    fs::write(&path, b"not a real mp3").unwrap();

    assert!(matches!(
        open_source(&path, Duration::ZERO),
        Err(PlayerError::Load { .. })
    ));
}
