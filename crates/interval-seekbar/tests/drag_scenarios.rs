//! End-to-end drag scenarios for the interval seek bar.
//!
//! These drive the widget through the public `Widget` surface the way a host
//! would: measure, layout, feed pointer events, paint.

use interval_core::{
    Constraints, DrawCommand, Event, MeasureSpec, MouseButton, Point, RecordingCanvas, Rect,
    Size, TouchId, Widget,
};
use interval_seekbar::{
    IntervalChanged, IntervalSeekBar, SeekBarAttributes, TrackGeometry,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("interval_seekbar=debug")
        .with_test_writer()
        .try_init();
}

fn hosted(width: f32) -> IntervalSeekBar {
    let mut bar = IntervalSeekBar::new();
    let size = bar.measure(Constraints::new(width, width, 0.0, f32::INFINITY));
    bar.layout(Rect::from_size(size));
    bar
}

fn press(bar: &mut IntervalSeekBar, x: f32, y: f32) {
    bar.event(&Event::MouseDown {
        position: Point::new(x, y),
        button: MouseButton::Left,
    });
}

fn drag(bar: &mut IntervalSeekBar, x: f32, y: f32) -> Option<IntervalChanged> {
    bar.event(&Event::MouseMove {
        position: Point::new(x, y),
    })
    .and_then(|msg| msg.downcast::<IntervalChanged>().ok())
    .map(|msg| *msg)
}

// =============================================================================
// Host Integration
// =============================================================================

#[test]
fn test_host_measure_layout_paint() {
    let bar = hosted(400.0);
    assert_eq!(bar.bounds().size(), Size::new(400.0, 120.0));

    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);
    assert_eq!(canvas.command_count(), 5);
    assert!(matches!(canvas.commands()[0], DrawCommand::Line { .. }));
    assert!(matches!(canvas.commands()[4], DrawCommand::Circle { .. }));
}

#[test]
fn test_measure_spec_matches_constraints() {
    let bar = IntervalSeekBar::new();
    assert_eq!(
        bar.measure(Constraints::loose(Size::new(500.0, 500.0))),
        bar.measure_spec(MeasureSpec::at_most(500.0), MeasureSpec::at_most(500.0))
    );
}

#[test]
fn test_configured_from_yaml() {
    let attrs = SeekBarAttributes::from_yaml(
        r##"
handle_radius: 10
horizontal_margin: 20
left_progress: 0
right_progress: 100
"##,
    )
    .unwrap();
    let mut bar = IntervalSeekBar::from_attributes(&attrs, 2.0).unwrap();
    bar.layout(Rect::new(0.0, 0.0, 400.0, 120.0));

    let geometry = bar.geometry();
    assert_eq!(geometry.track_start(), 40.0);
    assert_eq!(geometry.handle_radius(), 20.0);
    assert_eq!(geometry.handle_x(100), 360.0);
}

// =============================================================================
// Drag Scenarios
// =============================================================================

#[test]
fn test_scenario_left_drag_to_150() {
    init_tracing();
    let mut bar = hosted(400.0);
    assert_eq!(bar.geometry().min_gap_progress(), 18);

    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    bar.set_on_progress_change_listener(move |_: &IntervalSeekBar, l: i32, r: i32| {
        sink.lock().unwrap().push((l, r));
    });

    press(&mut bar, 104.0, 60.0);
    assert_eq!(
        drag(&mut bar, 150.0, 60.0),
        Some(IntervalChanged { left: 37, right: 80 })
    );
    assert_eq!(*calls.lock().unwrap(), vec![(37, 80)]);
}

#[test]
fn test_valid_then_invalid_move() {
    init_tracing();
    let mut bar = hosted(400.0);
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    bar.set_on_progress_change_listener(move |_: &IntervalSeekBar, l: i32, r: i32| {
        sink.lock().unwrap().push((l, r));
    });

    press(&mut bar, 296.0, 60.0);
    assert!(drag(&mut bar, 240.0, 60.0).is_some());
    assert_eq!(bar.right_progress(), 60);
    bar.take_redraw_requests();

    // 120 maps to 30; 20 < 30 - 18 fails
    assert!(drag(&mut bar, 120.0, 60.0).is_none());
    assert_eq!(bar.right_progress(), 60);
    assert!(!bar.needs_redraw());
    assert_eq!(*calls.lock().unwrap(), vec![(20, 60)]);
}

#[test]
fn test_touch_gesture_end_to_end() {
    let mut bar = hosted(400.0);
    let id = TouchId::new(0);

    bar.event(&Event::TouchStart {
        id,
        position: Point::new(296.0, 60.0),
    });
    let msg = bar.event(&Event::TouchMove {
        id,
        position: Point::new(340.0, 60.0),
    });
    assert!(msg.is_some());
    assert_eq!(bar.right_progress(), 85);

    bar.event(&Event::TouchEnd {
        id,
        position: Point::new(340.0, 60.0),
    });
    assert!(bar.drag_state().is_idle());
}

#[test]
fn test_widget_offset_in_parent() {
    let mut bar = IntervalSeekBar::new();
    bar.layout(Rect::new(100.0, 50.0, 400.0, 120.0));

    press(&mut bar, 204.0, 110.0);
    assert_eq!(
        drag(&mut bar, 250.0, 110.0),
        Some(IntervalChanged { left: 37, right: 80 })
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_drag_keeps_progress_in_range(xs in prop::collection::vec(-2000.0f32..2000.0, 1..20)) {
        let mut bar = hosted(400.0);
        press(&mut bar, 104.0, 60.0);
        for x in xs {
            drag(&mut bar, x, 60.0);
            prop_assert!((0..=100).contains(&bar.left_progress()));
            prop_assert!((0..=100).contains(&bar.right_progress()));
        }
    }

    #[test]
    fn prop_committed_state_respects_gap(xs in prop::collection::vec(0.0f32..400.0, 1..20)) {
        let mut bar = hosted(400.0);
        let gap = bar.geometry().min_gap_progress();
        press(&mut bar, 296.0, 60.0);
        for x in xs {
            if let Some(msg) = drag(&mut bar, x, 60.0) {
                prop_assert!(msg.left < msg.right - gap);
            }
            prop_assert!(bar.left_progress() < bar.right_progress() - gap);
        }
    }

    #[test]
    fn prop_rejected_move_is_invisible(x in 0.0f32..400.0) {
        let mut bar = hosted(400.0);
        press(&mut bar, 104.0, 60.0);
        let before = (bar.left_progress(), bar.right_progress());
        bar.take_redraw_requests();
        if drag(&mut bar, x, 60.0).is_none() {
            prop_assert_eq!((bar.left_progress(), bar.right_progress()), before);
            prop_assert!(!bar.needs_redraw());
        }
    }

    #[test]
    fn prop_measure_fits_constraints(
        min_w in 0.0f32..500.0,
        extra_w in 0.0f32..500.0,
        min_h in 0.0f32..300.0,
        extra_h in 0.0f32..300.0,
        laid_out in 0.0f32..1200.0,
    ) {
        let bar = hosted(laid_out);
        let c = Constraints::new(min_w, min_w + extra_w, min_h, min_h + extra_h);
        let size = bar.measure(c);
        prop_assert_eq!(size, c.constrain(size));

        let open = Constraints::new(min_w, f32::INFINITY, min_h, f32::INFINITY);
        let size = bar.measure(open);
        prop_assert_eq!(size, open.constrain(size));
    }

    #[test]
    fn prop_handles_inside_track(left in 0i32..=100, right in 0i32..=100, width in 200.0f32..1200.0) {
        let bar = hosted(width).interval(left, right);
        let geometry: TrackGeometry = bar.geometry();
        if geometry.allows(left, right) {
            let lx = geometry.handle_x(left);
            let rx = geometry.handle_x(right);
            prop_assert!(lx <= rx);
            prop_assert!(lx >= geometry.track_start() - 0.001);
            prop_assert!(rx <= geometry.track_end() + 0.001);
        }
    }
}
