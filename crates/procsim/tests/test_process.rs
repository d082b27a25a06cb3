use approx::assert_abs_diff_eq;
use procsim::{
    PipeId, Primitive, ProcessView, RecordingPainter, RunState, StartError, TankId, TickReport,
    Drawable,
};
use std::time::Instant;

fn quantities(view: &ProcessView) -> [f64; 4] {
    TankId::ALL.map(|id| view.tank(id).quantity())
}

fn flowing(view: &ProcessView) -> [bool; 3] {
    PipeId::ALL.map(|id| view.pipe(id).is_flowing())
}

/// Ticks until nothing moves any more
fn run_until_idle(view: &mut ProcessView) -> usize {
    for i in 0..10_000 {
        if view.tick().is_idle() {
            return i;
        }
    }
    panic!("process did not settle");
}

/// Fills T3 and T4 to the brim by draining two full loads of T1
fn fill_outlets(view: &mut ProcessView, now: Instant) {
    for _ in 0..2 {
        view.start("100", "1", now).unwrap();
        run_until_idle(view);
    }
    assert_eq!(quantities(view), [0., 0., 100., 100.]);
}

#[test]
fn test_start_sets_level_and_runs() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    assert_eq!(view.state(), RunState::Idle);

    view.start("42", "1.0", now).unwrap();

    assert_eq!(view.state(), RunState::Running);
    assert!(view.timer().is_active());
    assert_abs_diff_eq!(view.tank(TankId::T1).quantity(), 42.);
    assert_abs_diff_eq!(view.level(), 42.);
    assert_abs_diff_eq!(view.speed(), 1.);
}

#[test]
fn test_start_clamps_level() {
    let now = Instant::now();
    let mut view = ProcessView::default();

    view.start("150", "1", now).unwrap();
    assert_abs_diff_eq!(view.tank(TankId::T1).quantity(), 100.);

    view.start("-10", "1", now).unwrap();
    assert_abs_diff_eq!(view.tank(TankId::T1).quantity(), 0.);
}

#[test]
fn test_start_overwrites_instead_of_adding() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("60", "1", now).unwrap();
    view.start("30", "1", now).unwrap();
    assert_abs_diff_eq!(view.tank(TankId::T1).quantity(), 30.);
}

#[test]
fn test_start_with_invalid_input_changes_nothing() {
    let now = Instant::now();
    let mut view = ProcessView::default();

    let err = view.start("50", "abc", now).unwrap_err();
    assert!(matches!(err, StartError::InvalidSpeed { .. }));
    assert_eq!(view.state(), RunState::Idle);
    assert!(!view.timer().is_active());
    assert_eq!(quantities(&view), [0.; 4]);

    let err = view.start("lots", "1", now).unwrap_err();
    assert!(matches!(err, StartError::InvalidLevel { .. }));
    assert_eq!(view.state(), RunState::Idle);
    assert!(!view.timer().is_active());
    assert_eq!(view.poll(now + view.timer().interval()), None);
}

#[test]
fn test_invalid_restart_keeps_running_process() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("50", "2", now).unwrap();
    view.tick();
    let before = quantities(&view);

    assert!(view.start("10", "x", now).is_err());

    assert_eq!(view.state(), RunState::Running);
    assert_eq!(quantities(&view), before);
    assert_abs_diff_eq!(view.speed(), 2.);
}

#[test]
fn test_first_tick_feeds_and_splits() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("50", "1", now).unwrap();
    let angle = view.pump().angle();

    let report = view.tick();

    // The unit fed into T2 is split to T3 and T4 within the same tick
    assert_eq!(
        report,
        TickReport {
            feed: Some(1.),
            split: 1.
        }
    );
    assert_eq!(quantities(&view), [49., 0., 0.5, 0.5]);
    assert_eq!(flowing(&view), [true, true, true]);
    assert_abs_diff_eq!(view.pump().angle(), angle + 15.);
}

#[test]
fn test_feed_into_empty_buffer_with_full_outlets() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    fill_outlets(&mut view, now);

    view.start("50", "1", now).unwrap();
    let angle = view.pump().angle();
    let report = view.tick();

    assert_eq!(report.feed, Some(1.));
    assert_eq!(report.split, 0.);
    assert_eq!(quantities(&view), [49., 1., 100., 100.]);
    assert_eq!(flowing(&view), [true, false, false]);
    assert_abs_diff_eq!(view.pump().angle(), (angle + 15.) % 360.);
}

#[test]
fn test_full_buffer_blocks_feed() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    fill_outlets(&mut view, now);

    view.start("100", "1", now).unwrap();
    run_until_idle(&mut view);
    assert_eq!(quantities(&view), [0., 100., 100., 100.]);

    view.start("30", "1", now).unwrap();
    let angle = view.pump().angle();
    let report = view.tick();

    assert!(report.is_idle());
    assert_eq!(quantities(&view), [30., 100., 100., 100.]);
    assert_eq!(flowing(&view), [false, false, false]);
    assert_abs_diff_eq!(view.pump().angle(), angle);
}

#[test]
fn test_feed_loses_what_buffer_cannot_take() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    fill_outlets(&mut view, now);

    // Leaves T2 half a unit short of full
    view.start("100", "0.5", now).unwrap();
    for _ in 0..199 {
        view.tick();
    }
    assert_eq!(quantities(&view), [0.5, 99.5, 100., 100.]);

    view.start("10", "1", now).unwrap();
    let report = view.tick();

    assert_eq!(report.feed, Some(1.));
    assert_eq!(quantities(&view), [9., 100., 100., 100.]);
}

#[test]
fn test_process_settles_with_even_split() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("100", "2.5", now).unwrap();

    let ticks = run_until_idle(&mut view);

    assert_eq!(ticks, 40);
    assert_eq!(quantities(&view), [0., 0., 50., 50.]);
    assert_eq!(flowing(&view), [false, false, false]);
    assert!(view.is_running());
}

#[test]
fn test_reset_clears_everything() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("80", "3", now).unwrap();
    for _ in 0..5 {
        view.tick();
    }
    let angle = view.pump().angle();
    view.take_redraw_request();

    view.reset();

    assert_eq!(view.state(), RunState::Idle);
    assert!(!view.timer().is_active());
    assert_eq!(quantities(&view), [0.; 4]);
    assert_eq!(flowing(&view), [false; 3]);
    assert_abs_diff_eq!(view.pump().angle(), angle);
    assert!(view.take_redraw_request());
    assert_eq!(view.poll(now + view.timer().interval()), None);
}

#[test]
fn test_poll_follows_timer() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    let interval = view.timer().interval();

    assert_eq!(view.poll(now + interval), None);

    view.start("10", "1", now).unwrap();
    assert_eq!(view.poll(now), None);

    let report = view.poll(now + interval).expect("tick due");
    assert_eq!(report.feed, Some(1.));
    assert_abs_diff_eq!(view.tank(TankId::T1).quantity(), 9.);
}

#[test]
fn test_render_order() {
    let now = Instant::now();
    let mut view = ProcessView::default();
    view.start("50", "1", now).unwrap();
    view.tick();

    let mut painter = RecordingPainter::new();
    view.draw(&mut painter);

    let circle = painter
        .primitives
        .iter()
        .position(|p| matches!(p, Primitive::Circle { .. }))
        .unwrap();
    let first_rect = painter
        .primitives
        .iter()
        .position(|p| matches!(p, Primitive::Rect { .. }))
        .unwrap();

    // Three pipes, all flowing: wall and fluid stroke each
    assert_eq!(circle, 6);
    assert!(
        painter.primitives[..circle]
            .iter()
            .all(|p| matches!(p, Primitive::Polyline { .. }))
    );
    // Housing and four spokes come before the tanks
    assert_eq!(first_rect, circle + 5);

    let texts = painter
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { lines, .. } => Some(lines.join(" ")),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(texts, vec!["T1 49%", "T2 0%", "T3 0%", "T4 0%"]);
}
