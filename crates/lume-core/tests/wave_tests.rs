use lume_core::{wave_path, AudioToggle, PlaybackState, FLAT_WAVE_PATH, WAVE_POINTS};

#[test]
fn wave_path_is_pure() {
    assert_eq!(wave_path(123.4), wave_path(123.4));
    assert_eq!(wave_path(0.0), wave_path(0.0));
}

#[test]
fn wave_path_starts_at_baseline() {
    let p = wave_path(0.0);
    assert!(p.starts_with("M0 15"), "unexpected head: {p}");
    // First sample sits on the baseline at t=0.
    assert!(p.contains(" L0.00 15.00"), "unexpected first segment: {p}");
}

#[test]
fn wave_path_has_expected_segment_count() {
    let p = wave_path(42.0);
    assert_eq!(p.matches(" L").count(), WAVE_POINTS + 1);
}

#[test]
fn wave_path_stays_within_amplitude_bounds() {
    for t in [0.0, 17.0, 250.0, 1000.0, 99_999.5] {
        let p = wave_path(t);
        for seg in p.split(" L").skip(1) {
            let mut coords = seg.split(' ');
            let _x = coords.next().unwrap();
            let y: f64 = coords.next().unwrap().parse().unwrap();
            assert!((5.0..=25.0).contains(&y), "y={y} out of range at t={t}");
        }
    }
}

#[test]
fn audio_toggle_is_a_strict_two_state_machine() {
    let mut t = AudioToggle::new();
    assert_eq!(t.state(), PlaybackState::Paused);
    assert_eq!(t.toggle(), PlaybackState::Playing);
    assert!(t.is_playing());
    assert_eq!(t.toggle(), PlaybackState::Paused);
    assert!(!t.is_playing());
    // No wave frames while paused.
    assert!(t.frame(100.0).is_none());
}

#[test]
fn wave_clock_anchors_on_first_frame() {
    let mut t = AudioToggle::new();
    t.toggle();
    // The first frame after activation defines t=0 regardless of the
    // absolute timestamp.
    assert_eq!(t.frame(1000.0).unwrap(), wave_path(0.0));
    assert_eq!(t.frame(1420.0).unwrap(), wave_path(420.0));
}

#[test]
fn wave_clock_resets_on_replay() {
    let mut t = AudioToggle::new();
    t.toggle();
    let _ = t.frame(500.0);
    t.toggle(); // pause
    t.toggle(); // play again
    assert_eq!(t.frame(2000.0).unwrap(), wave_path(0.0));
}

#[test]
fn flat_path_matches_reset_shape() {
    assert_eq!(FLAT_WAVE_PATH, "M0 15 L120 15");
}
