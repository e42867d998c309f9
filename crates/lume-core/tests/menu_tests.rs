use lume_core::{
    MenuController, MenuState, Sample, Target, Timeline, TweenEvent, MENU_ITEM_OPEN_DELAY,
    MENU_ITEM_OPEN_STAGGER, MENU_LOGO_DIM_OPACITY, MENU_LOGO_OFFSET_Y, MENU_PANEL_OPEN_SECS,
};

const ITEMS: usize = 4;
const FRAME: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn toggle_round_trip_restores_closed() {
    let mut ctl = MenuController::new(ITEMS);
    assert_eq!(ctl.state(), MenuState::Closed);
    ctl.toggle();
    assert_eq!(ctl.state(), MenuState::Open);
    ctl.toggle();
    assert_eq!(ctl.state(), MenuState::Closed);
}

#[test]
fn open_batch_shape() {
    let mut ctl = MenuController::new(ITEMS);
    let batch = ctl.toggle();

    // Panel, logo, and one tween per item.
    assert_eq!(batch.len(), 2 + ITEMS);

    let panel = batch
        .iter()
        .find(|t| t.target == Target::MenuPanel)
        .unwrap();
    assert_eq!(panel.duration, MENU_PANEL_OPEN_SECS);
    assert!(approx(panel.to.offset_y, 0.0) && approx(panel.to.opacity, 1.0));

    let logo = batch.iter().find(|t| t.target == Target::Logo).unwrap();
    assert!(approx(logo.to.offset_y, MENU_LOGO_OFFSET_Y));
    assert!(approx(logo.to.opacity, MENU_LOGO_DIM_OPACITY));

    for i in 0..ITEMS {
        let item = batch
            .iter()
            .find(|t| t.target == Target::MenuItem(i))
            .unwrap();
        assert!(approx(
            item.delay,
            MENU_ITEM_OPEN_DELAY + MENU_ITEM_OPEN_STAGGER * i as f32
        ));
    }
}

#[test]
fn close_batch_staggers_in_reverse() {
    let mut ctl = MenuController::new(ITEMS);
    ctl.toggle();
    let batch = ctl.toggle();

    let delay = |i: usize| {
        batch
            .iter()
            .find(|t| t.target == Target::MenuItem(i))
            .unwrap()
            .delay
    };
    // Later items lead the exit.
    for i in 1..ITEMS {
        assert!(delay(i) < delay(i - 1));
    }
    assert!(approx(delay(ITEMS - 1), 0.0));
}

/// Drive a batch through a timeline to completion, recording final samples
/// and the panel interactivity flag the frontend would derive.
fn run_to_completion(
    ctl: &MenuController,
    timeline: &mut Timeline,
    interactive: &mut bool,
    finals: &mut Vec<(Target, Sample)>,
) {
    let mut samples = Vec::new();
    let mut events = Vec::new();
    let open = ctl.is_open();
    for _ in 0..600 {
        samples.clear();
        events.clear();
        timeline.tick(FRAME, &mut samples, &mut events);
        for (target, sample) in &samples {
            if let Some(slot) = finals.iter_mut().find(|(t, _)| t == target) {
                slot.1 = *sample;
            } else {
                finals.push((*target, *sample));
            }
        }
        for ev in &events {
            match ev {
                TweenEvent::Started(Target::MenuPanel) if open => *interactive = true,
                TweenEvent::Completed(Target::MenuPanel) if !open => *interactive = false,
                _ => {}
            }
        }
        if timeline.is_idle() {
            return;
        }
    }
    panic!("timeline did not finish");
}

#[test]
fn open_close_cycle_restores_rest_pose_and_gating() {
    let mut ctl = MenuController::new(ITEMS);
    let mut timeline = Timeline::new();
    let mut interactive = false;
    let mut finals: Vec<(Target, Sample)> = Vec::new();

    timeline.play(ctl.toggle()).unwrap();
    run_to_completion(&ctl, &mut timeline, &mut interactive, &mut finals);
    assert!(interactive, "panel must accept input once opening starts");

    timeline.play(ctl.toggle()).unwrap();
    run_to_completion(&ctl, &mut timeline, &mut interactive, &mut finals);

    assert_eq!(ctl.state(), MenuState::Closed);
    assert!(!interactive, "panel must be inert after closing completes");

    let rest = MenuController::closed_panel_rest();
    let panel = finals
        .iter()
        .find(|(t, _)| *t == Target::MenuPanel)
        .unwrap()
        .1;
    assert!(approx(panel.offset_y, rest.offset_y) && approx(panel.opacity, rest.opacity));

    let logo = finals.iter().find(|(t, _)| *t == Target::Logo).unwrap().1;
    assert!(approx(logo.offset_y, 0.0) && approx(logo.opacity, 1.0));

    for i in 0..ITEMS {
        let item = finals
            .iter()
            .find(|(t, _)| *t == Target::MenuItem(i))
            .unwrap()
            .1;
        assert!(approx(item.opacity, 0.0), "item {i} must fade out");
    }
}

#[test]
fn retrigger_mid_open_plays_close_from_current_pose() {
    let mut ctl = MenuController::new(ITEMS);
    let mut timeline = Timeline::new();
    timeline.play(ctl.toggle()).unwrap();

    let mut samples = Vec::new();
    let mut events = Vec::new();
    for _ in 0..10 {
        samples.clear();
        events.clear();
        timeline.tick(FRAME, &mut samples, &mut events);
    }
    let mid = timeline.current(Target::MenuPanel).unwrap();

    timeline.play(ctl.toggle()).unwrap();
    let after = timeline.current(Target::MenuPanel).unwrap();
    assert!(
        approx(mid.offset_y, after.offset_y),
        "close must continue from the in-flight position"
    );
    assert_eq!(ctl.state(), MenuState::Closed);
}
