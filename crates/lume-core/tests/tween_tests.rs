use lume_core::{stagger, Ease, Sample, Target, Timeline, Tween, TweenError, TweenEvent};

fn tween(target: Target, from: f32, to: f32, delay: f32, duration: f32, ease: Ease) -> Tween {
    Tween {
        target,
        from: Sample {
            offset_y: from,
            opacity: 0.0,
        },
        to: Sample {
            offset_y: to,
            opacity: 1.0,
        },
        delay,
        duration,
        ease,
    }
}

#[test]
fn easing_endpoints_and_monotonicity() {
    for ease in [
        Ease::Linear,
        Ease::PowerIn(2),
        Ease::PowerIn(4),
        Ease::PowerOut(3),
        Ease::PowerOut(4),
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = ease.apply(i as f32 / 20.0);
            assert!(v >= prev, "{ease:?} not monotone at step {i}");
            prev = v;
        }
    }
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert!((Ease::PowerIn(2).apply(0.5) - 0.25).abs() < 1e-6);
}

#[test]
fn ease_clamps_out_of_range_progress() {
    assert_eq!(Ease::PowerOut(4).apply(-1.0), 0.0);
    assert!((Ease::PowerOut(4).apply(2.0) - 1.0).abs() < 1e-6);
}

#[test]
fn stagger_forward_and_reverse() {
    assert_eq!(stagger(3, 0.1, 0.2), vec![0.2, 0.3, 0.4]);
    // Negative step: later items lead.
    assert_eq!(stagger(3, -0.05, 0.0), vec![0.1, 0.05, 0.0]);
    assert!(stagger(0, 0.1, 0.0).is_empty());
}

#[test]
fn timeline_rejects_non_positive_duration() {
    let mut tl = Timeline::new();
    let err = tl
        .play([tween(Target::Logo, 0.0, 1.0, 0.0, 0.0, Ease::Linear)])
        .unwrap_err();
    assert_eq!(err, TweenError::NonPositiveDuration(0.0));
}

#[test]
fn timeline_lifecycle_events() {
    let mut tl = Timeline::new();
    tl.play([tween(Target::Logo, 0.0, 100.0, 0.5, 1.0, Ease::Linear)])
        .unwrap();

    let mut samples = Vec::new();
    let mut events = Vec::new();

    // Still inside the delay: nothing visible.
    tl.tick(0.25, &mut samples, &mut events);
    assert!(samples.is_empty());
    assert!(events.is_empty());

    // Crosses the delay: starts and emits a sample.
    tl.tick(0.5, &mut samples, &mut events);
    assert_eq!(events, vec![TweenEvent::Started(Target::Logo)]);
    assert_eq!(samples.len(), 1);

    // Run past the end: completes with the rest value and empties out.
    samples.clear();
    events.clear();
    tl.tick(2.0, &mut samples, &mut events);
    assert_eq!(events, vec![TweenEvent::Completed(Target::Logo)]);
    let (_, last) = samples[samples.len() - 1];
    assert!((last.offset_y - 100.0).abs() < 1e-3);
    assert!(tl.is_idle());
}

#[test]
fn retrigger_preempts_from_current_value() {
    let mut tl = Timeline::new();
    tl.play([tween(Target::MenuPanel, 0.0, 100.0, 0.0, 1.0, Ease::Linear)])
        .unwrap();

    let mut samples = Vec::new();
    let mut events = Vec::new();
    tl.tick(0.5, &mut samples, &mut events);
    let mid = tl.current(Target::MenuPanel).unwrap();
    assert!((mid.offset_y - 50.0).abs() < 1e-3);

    // The declared `from` is ignored for an in-flight target; motion
    // continues from the interpolated position.
    tl.play([tween(Target::MenuPanel, 999.0, 0.0, 0.0, 1.0, Ease::Linear)])
        .unwrap();
    let replaced = tl.current(Target::MenuPanel).unwrap();
    assert!((replaced.offset_y - 50.0).abs() < 1e-3);

    samples.clear();
    events.clear();
    tl.tick(0.5, &mut samples, &mut events);
    let (_, s) = samples[0];
    assert!(s.offset_y < 50.0 && s.offset_y > 0.0);
}

#[test]
fn one_tween_per_target_after_retrigger() {
    let mut tl = Timeline::new();
    tl.play([tween(Target::MenuItem(0), 0.0, 1.0, 0.0, 1.0, Ease::Linear)])
        .unwrap();
    tl.play([tween(Target::MenuItem(0), 1.0, 0.0, 0.0, 1.0, Ease::Linear)])
        .unwrap();

    let mut samples = Vec::new();
    let mut events = Vec::new();
    tl.tick(0.1, &mut samples, &mut events);
    assert_eq!(samples.len(), 1, "preempted tween must be dropped");
}
