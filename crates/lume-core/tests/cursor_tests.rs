use glam::Vec2;
use lume_core::CursorFollower;

#[test]
fn outer_marker_converges_geometrically() {
    let mut c = CursorFollower::new();
    c.set_pointer(800.0, 600.0);
    let target = Vec2::new(800.0, 600.0);

    let mut prev = (target - c.outer()).length();
    for _ in 0..60 {
        let pos = c.step();
        let dist = (target - pos).length();
        assert!(dist < prev, "distance must shrink every frame");
        // Decay by exactly 7/8 per frame.
        assert!((dist / prev - 7.0 / 8.0).abs() < 1e-3);
        prev = dist;
    }
    assert!(prev < 1.0, "should be within a pixel after 60 frames");
}

#[test]
fn outer_marker_never_overshoots() {
    let mut c = CursorFollower::new();
    c.set_pointer(100.0, -50.0);
    for _ in 0..200 {
        let pos = c.step();
        assert!(pos.x <= 100.0, "x overshot: {}", pos.x);
        assert!(pos.y >= -50.0, "y overshot: {}", pos.y);
    }
}

#[test]
fn pointer_updates_are_immediate() {
    let mut c = CursorFollower::new();
    c.set_pointer(10.0, 20.0);
    assert_eq!(c.pointer(), Vec2::new(10.0, 20.0));
    // The smoothed point only moves on step().
    assert_eq!(c.outer(), Vec2::ZERO);
}

#[test]
fn pressed_flag_tracks_button_state() {
    let mut c = CursorFollower::new();
    assert!(!c.pressed());
    c.set_pressed(true);
    assert!(c.pressed());
    c.set_pressed(false);
    assert!(!c.pressed());
}
