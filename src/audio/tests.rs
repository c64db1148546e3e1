use super::types::{PlaybackInfo, SessionPhase};
use std::path::PathBuf;
use std::time::Duration;

fn prepared_info(duration_secs: u64) -> PlaybackInfo {
    let mut info = PlaybackInfo::default();
    info.begin_load(1, PathBuf::from("/tmp/song.mp3"));
    assert!(info.apply_prepared(1, Some(Duration::from_secs(duration_secs))));
    info
}

#[test]
fn begin_load_resets_the_session() {
    let mut info = prepared_info(60);
    info.phase = SessionPhase::Playing;
    info.position = Duration::from_secs(12);

    info.begin_load(2, PathBuf::from("/tmp/other.mp3"));
    assert_eq!(info.phase, SessionPhase::Idle);
    assert_eq!(info.duration, None);
    assert_eq!(info.position, Duration::ZERO);
    assert_eq!(info.generation, 2);
    assert_eq!(info.path, Some(PathBuf::from("/tmp/other.mp3")));
}

#[test]
fn apply_prepared_sets_phase_and_progress_bounds() {
    let mut info = PlaybackInfo::default();
    info.begin_load(1, PathBuf::from("/tmp/song.mp3"));

    assert!(info.apply_prepared(1, Some(Duration::from_secs(180))));
    assert_eq!(info.phase, SessionPhase::Prepared);
    assert_eq!(info.duration, Some(Duration::from_secs(180)));
    assert_eq!(info.position, Duration::ZERO);
}

#[test]
fn apply_prepared_rejects_stale_generation() {
    let mut info = PlaybackInfo::default();
    info.begin_load(1, PathBuf::from("/tmp/first.mp3"));
    info.begin_load(2, PathBuf::from("/tmp/second.mp3"));

    // The first load's preparation arrives late; it must not win.
    assert!(!info.apply_prepared(1, Some(Duration::from_secs(99))));
    assert_eq!(info.phase, SessionPhase::Idle);
    assert_eq!(info.duration, None);
    assert_eq!(info.path, Some(PathBuf::from("/tmp/second.mp3")));
}

#[test]
fn toggle_is_inert_until_prepared() {
    let mut info = PlaybackInfo::default();
    assert_eq!(info.toggled_phase(), None);

    info.begin_load(1, PathBuf::from("/tmp/song.mp3"));
    assert_eq!(info.toggled_phase(), None);
}

#[test]
fn toggle_cycles_playing_and_paused() {
    let mut info = prepared_info(60);

    assert_eq!(info.toggled_phase(), Some(SessionPhase::Playing));
    info.phase = SessionPhase::Playing;

    assert_eq!(info.toggled_phase(), Some(SessionPhase::Paused));
    info.phase = SessionPhase::Paused;

    assert_eq!(info.toggled_phase(), Some(SessionPhase::Playing));
}

#[test]
fn tick_advances_only_while_playing() {
    let mut info = prepared_info(60);

    info.tick(Duration::from_secs(1));
    assert_eq!(info.position, Duration::ZERO);

    info.phase = SessionPhase::Playing;
    info.tick(Duration::from_secs(1));
    info.tick(Duration::from_secs(1));
    assert_eq!(info.position, Duration::from_secs(2));

    // The ticker keeps running while paused; the position holds still.
    info.phase = SessionPhase::Paused;
    info.tick(Duration::from_secs(1));
    assert_eq!(info.position, Duration::from_secs(2));
}

#[test]
fn tick_clamps_at_duration() {
    let mut info = prepared_info(3);
    info.phase = SessionPhase::Playing;

    for _ in 0..10 {
        let before = info.position;
        info.tick(Duration::from_secs(1));
        assert!(info.position >= before);
    }
    assert_eq!(info.position, Duration::from_secs(3));
}

#[test]
fn completion_rewinds_and_idles_but_keeps_bounds() {
    let mut info = prepared_info(60);
    info.phase = SessionPhase::Playing;
    info.position = Duration::from_secs(60);

    info.apply_completion();
    assert_eq!(info.phase, SessionPhase::Idle);
    assert_eq!(info.position, Duration::ZERO);
    assert_eq!(info.duration, Some(Duration::from_secs(60)));
    // And a toggle is a no-op again until the next load.
    assert_eq!(info.toggled_phase(), None);
}

#[test]
fn clear_resets_the_session_and_takes_the_new_generation() {
    let mut info = prepared_info(60);
    info.phase = SessionPhase::Playing;
    info.position = Duration::from_secs(30);

    info.clear(2);
    assert_eq!(info.phase, SessionPhase::Idle);
    assert_eq!(info.path, None);
    assert_eq!(info.duration, None);
    assert_eq!(info.position, Duration::ZERO);
    assert_eq!(info.generation, 2);
}

#[test]
fn prepare_finishing_after_a_stop_is_rejected() {
    let mut info = PlaybackInfo::default();
    info.begin_load(1, PathBuf::from("/tmp/song.mp3"));

    // The stop bumps the generation before the prepare finishes, so
    // the late result must not bring the session back.
    info.clear(2);
    assert!(!info.apply_prepared(1, Some(Duration::from_secs(60))));
    assert_eq!(info.phase, SessionPhase::Idle);
    assert_eq!(info.duration, None);
}
