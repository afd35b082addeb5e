use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::{TempDir, tempdir};

use super::*;
use crate::display::{DisplayModel, Transport};
use crate::error::PlayerError;
use crate::storage::FsStorage;
use crate::testing::{EngineCall, FakeEngine, FakeInspector};

type TestController = PlaybackController<FakeEngine, FakeInspector, FsStorage>;

/// Create `files` in a fresh directory, all known to the inspector.
fn library(files: &[(&str, u64)]) -> (TempDir, Vec<PathBuf>, FakeInspector) {
    let dir = tempdir().unwrap();
    let mut inspector = FakeInspector::default();
    let mut paths = Vec::new();
    for (name, duration_ms) in files {
        let path = dir.path().join(name);
        fs::write(&path, b"not real audio").unwrap();
        inspector = inspector.with(path.clone(), *duration_ms);
        paths.push(path);
    }
    (dir, paths, inspector)
}

fn controller(engine: FakeEngine, inspector: FakeInspector) -> TestController {
    PlaybackController::new(
        engine,
        inspector,
        FsStorage,
        ControllerOptions::default(),
        DisplayModel::new(46, ""),
    )
    .with_rng(StdRng::seed_from_u64(7))
}

fn started(files: &[(&str, u64)]) -> (TempDir, Vec<PathBuf>, TestController) {
    let (dir, paths, inspector) = library(files);
    let mut c = controller(FakeEngine::default(), inspector);
    c.start(&paths[0]).unwrap();
    (dir, paths, c)
}

#[test]
fn start_loads_plays_and_titles() {
    let (_dir, paths, c) = started(&[("a.mp3", 125_000)]);

    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.track(), Some(paths[0].as_path()));
    assert_eq!(c.offset_ms(), 0);
    assert_eq!(c.duration_ms(), 125_000);
    assert_eq!(c.display().title(), "a.mp3");
    assert_eq!(c.display().transport(), Transport::Playing);
    assert_eq!(
        c.engine().calls,
        vec![
            EngineCall::Load(paths[0].clone()),
            EngineCall::Play(Duration::ZERO)
        ]
    );
}

#[test]
fn failed_initial_load_stays_stopped() {
    let (_dir, paths, inspector) = library(&[("a.mp3", 1_000)]);
    let mut c = controller(FakeEngine::broken([paths[0].clone()]), inspector);

    let err = c.start(&paths[0]).unwrap_err();
    assert!(matches!(err, PlayerError::Load { .. }));
    assert_eq!(c.state(), PlaybackState::Stopped);
    assert_eq!(c.track(), None);
}

#[test]
fn uninspectable_track_gets_one_second_duration() {
    let (_dir, paths, _) = library(&[("a.mp3", 1_000)]);
    let mut c = controller(FakeEngine::default(), FakeInspector::default());

    c.start(&paths[0]).unwrap();
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.duration_ms(), 1_000);

    // Seeking needs the duration again and drops the event instead.
    assert!(matches!(
        c.seek_step(SeekDirection::Forward),
        Err(PlayerError::Inspection { .. })
    ));
    assert_eq!(c.offset_ms(), 0);

    // Progress still moves, up to the floor.
    for _ in 0..3 {
        c.tick(500);
    }
    assert_eq!(c.offset_ms(), 1_000);
    c.refresh_progress(20);
    assert_eq!(c.display().readout(), "00:01          00:01");
}

#[test]
fn very_short_track_is_floored_to_one_second() {
    let (_dir, _paths, c) = started(&[("blip.wav", 300)]);
    assert_eq!(c.duration_ms(), 1_000);
}

#[test]
fn toggle_pause_round_trips_state_and_glyph() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 10_000)]);
    let before = c.display().lines();

    c.toggle_pause();
    assert_eq!(c.state(), PlaybackState::Paused);
    assert_eq!(c.display().transport(), Transport::Paused);
    assert_eq!(c.engine().last_call(), Some(&EngineCall::Pause));

    c.toggle_pause();
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.engine().last_call(), Some(&EngineCall::Unpause));
    assert_eq!(c.display().lines(), before);
}

#[test]
fn toggle_pause_is_noop_when_stopped() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 10_000)]);
    c.stop();
    let calls = c.engine().calls.len();

    c.toggle_pause();
    assert_eq!(c.state(), PlaybackState::Stopped);
    assert_eq!(c.engine().calls.len(), calls);
}

#[test]
fn seek_clamps_to_track_bounds() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 40_000)]);

    c.seek_step(SeekDirection::Backward).unwrap();
    assert_eq!(c.offset_ms(), 0);

    c.seek(39_500).unwrap();
    assert_eq!(c.offset_ms(), 39_500);

    // 2.5% of 40s is 1s; 40.5s is clamped to the end.
    c.seek_step(SeekDirection::Forward).unwrap();
    assert_eq!(c.offset_ms(), 40_000);
    assert_eq!(
        c.engine().last_call(),
        Some(&EngineCall::Play(Duration::from_millis(40_000)))
    );

    c.seek_step(SeekDirection::Forward).unwrap();
    assert_eq!(c.offset_ms(), 40_000);
}

#[test]
fn seek_step_scales_with_duration() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 200_000)]);

    c.seek_step(SeekDirection::Forward).unwrap();
    c.seek_step(SeekDirection::Forward).unwrap();
    assert_eq!(c.offset_ms(), 10_000);

    c.seek_step(SeekDirection::Backward).unwrap();
    assert_eq!(c.offset_ms(), 5_000);
}

#[test]
fn seek_resumes_paused_playback() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 40_000)]);
    c.toggle_pause();

    c.seek(2_000).unwrap();
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.display().transport(), Transport::Playing);
}

#[test]
fn advance_with_single_file_replays_it() {
    let (_dir, paths, mut c) = started(&[("only.mp3", 10_000)]);
    c.seek(5_000).unwrap();

    assert_eq!(c.advance_random(), Advance::Replayed);
    assert_eq!(c.track(), Some(paths[0].as_path()));
    assert_eq!(c.offset_ms(), 0);
    assert_eq!(c.state(), PlaybackState::Playing);
}

#[test]
fn advance_picks_a_different_audio_sibling() {
    let (dir, paths, mut c) = started(&[("a.mp3", 10_000), ("B.FLAC", 20_000)]);
    fs::write(dir.path().join("cover.jpg"), b"x").unwrap();
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();

    for _ in 0..5 {
        let current = c.track().unwrap().to_path_buf();
        let other = if current == paths[0] { &paths[1] } else { &paths[0] };

        assert_eq!(c.advance_random(), Advance::Advanced(other.clone()));
        assert_eq!(c.track(), Some(other.as_path()));
    }
}

#[test]
fn advance_updates_duration_and_title() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 10_000), ("b.ogg", 20_000)]);

    c.advance_random();
    assert_eq!(c.duration_ms(), 20_000);
    assert_eq!(c.display().title(), "b.ogg");
}

#[test]
fn advance_to_unloadable_file_restarts_current() {
    let (_dir, paths, inspector) = library(&[("a.mp3", 10_000), ("b.mp3", 10_000)]);
    let mut c = controller(FakeEngine::broken([paths[1].clone()]), inspector);
    c.start(&paths[0]).unwrap();
    c.seek(4_000).unwrap();
    c.toggle_pause();

    assert_eq!(c.advance_random(), Advance::Restarted);
    assert_eq!(c.track(), Some(paths[0].as_path()));
    assert_eq!(c.engine().loaded(), Some(paths[0].as_path()));
    assert_eq!(c.offset_ms(), 0);
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.display().transport(), Transport::Playing);

    let tail = &c.engine().calls[c.engine().calls.len() - 2..];
    assert_eq!(tail, &[EngineCall::Rewind, EngineCall::Unpause]);
}

#[test]
fn advance_in_unreadable_directory_restarts_current() {
    let (dir, paths, mut c) = started(&[("a.mp3", 10_000)]);
    fs::remove_dir_all(dir.path()).unwrap();

    assert_eq!(c.advance_random(), Advance::Restarted);
    assert_eq!(c.track(), Some(paths[0].as_path()));
}

#[test]
fn delete_removes_file_and_advances() {
    let (_dir, paths, mut c) = started(&[("a.mp3", 10_000), ("b.mp3", 10_000)]);

    let outcome = c.delete_current_and_advance().unwrap();
    assert_eq!(outcome, Advance::Advanced(paths[1].clone()));
    assert!(!paths[0].exists());
    assert!(paths[1].exists());
}

#[test]
fn delete_of_last_file_restarts_instead_of_crashing() {
    let (_dir, paths, mut c) = started(&[("a.mp3", 10_000)]);

    assert_eq!(c.delete_current_and_advance().unwrap(), Advance::Restarted);
    assert!(!paths[0].exists());
    assert_eq!(c.state(), PlaybackState::Playing);
}

#[test]
fn delete_of_last_file_that_cannot_rewind_goes_quiet() {
    let (_dir, paths, mut c) = started(&[("a.mp3", 10_000)]);
    c.tick(500);
    c.engine_mut().rewind_fails = true;

    assert_eq!(c.delete_current_and_advance().unwrap(), Advance::Stalled);
    assert!(!paths[0].exists());
    assert_eq!(c.engine().last_call(), Some(&EngineCall::Stop));
    // Position is kept rather than pretending the track restarted.
    assert_eq!(c.offset_ms(), 500);

    // The silenced engine no longer reports a finished track, so ticks do
    // not keep retrying the advance.
    let calls = c.engine().calls.len();
    for _ in 0..5 {
        assert_eq!(c.tick(500), None);
    }
    assert_eq!(c.engine().calls.len(), calls);
    assert_eq!(c.offset_ms(), 500);
}

#[test]
fn failed_delete_leaves_playback_alone() {
    let (_dir, paths, mut c) = started(&[("a.mp3", 10_000), ("b.mp3", 10_000)]);
    fs::remove_file(&paths[0]).unwrap();
    let calls = c.engine().calls.len();

    let err = c.delete_current_and_advance().unwrap_err();
    assert!(matches!(err, PlayerError::Delete { .. }));
    assert_eq!(c.track(), Some(paths[0].as_path()));
    assert_eq!(c.state(), PlaybackState::Playing);
    assert_eq!(c.engine().calls.len(), calls);
}

#[test]
fn stop_is_terminal() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 10_000), ("b.mp3", 10_000)]);

    c.stop();
    assert_eq!(c.state(), PlaybackState::Stopped);
    assert_eq!(c.engine().last_call(), Some(&EngineCall::Stop));
    assert_eq!(c.advance_random(), Advance::Idle);
    assert_eq!(c.tick(500), None);
    c.seek(1_000).unwrap();
    assert_eq!(c.state(), PlaybackState::Stopped);
}

#[test]
fn tick_advances_only_while_sounding() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 1_200)]);

    c.tick(500);
    assert_eq!(c.offset_ms(), 500);

    c.toggle_pause();
    c.tick(500);
    assert_eq!(c.offset_ms(), 500);

    c.toggle_pause();
    c.tick(500);
    c.tick(500);
    assert_eq!(c.offset_ms(), 1_200);
}

#[test]
fn tick_after_track_end_continues_randomly() {
    let (_dir, paths, inspector) = library(&[("a.mp3", 10_000), ("b.mp3", 10_000)]);
    let mut c = controller(FakeEngine::default(), inspector);
    c.start(&paths[0]).unwrap();

    c.engine_mut().finished = true;

    assert_eq!(c.tick(500), Some(Advance::Advanced(paths[1].clone())));
    assert_eq!(c.offset_ms(), 0);
}

#[test]
fn refresh_progress_writes_bar_and_readout() {
    let (_dir, _paths, mut c) = started(&[("a.mp3", 125_000)]);
    c.seek(61_000).unwrap();

    c.refresh_progress(20);
    assert_eq!(c.display().bar().chars().filter(|&g| g == '█').count(), 9);
    assert_eq!(c.display().bar().chars().count(), 20);
    assert_eq!(c.display().readout(), "01:01          02:05");
}

#[test]
fn parent_dir_of_bare_name_is_cwd() {
    assert_eq!(
        super::random::parent_dir(Path::new("song.mp3")),
        PathBuf::from(".")
    );
    assert_eq!(
        super::random::parent_dir(Path::new("/music/song.mp3")),
        PathBuf::from("/music")
    );
}
