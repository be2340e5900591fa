//! Behavior tests for the d-pad overlay, driven through the recording renderer.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use dpad_overlay::prelude::*;
use dpad_overlay::render::{DrawCommand, GlyphMetrics};
use dpad_overlay::{DPadError, KeyAction as Action};

/// Metrics giving textWidth 30, textHeight 20 and lineHeight 40 with the
/// default padding of 4 and a two-glyph widest caption.
fn renderer() -> RecordingRenderer {
    RecordingRenderer::with_metrics(GlyphMetrics::new(13.0, 20.0, 36.0))
}

fn config() -> DPadConfig {
    DPadConfig {
        widest_caption: "XX".into(),
        ..DPadConfig::default()
    }
}

fn painted_widget() -> DPadWidget {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("dpad_overlay=trace")
        .with_test_writer()
        .try_init();

    let mut dpad = DPadWidget::with_config(config()).unwrap();
    dpad.paint(&mut renderer());
    dpad
}

/// Attach a signal that records every key event.
fn record_keys(dpad: &mut DPadWidget) -> Arc<Mutex<Vec<DirectionKeyEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let signal = Arc::new(Signal::<DirectionKeyEvent>::new());
    let sink = seen.clone();
    signal.connect(move |event| sink.lock().push(*event));
    dpad.set_key_target(signal);
    seen
}

fn center_of(dpad: &DPadWidget, direction: Direction) -> Point {
    dpad.button(direction)
        .bounding_box()
        .expect("painted button has a box")
        .center()
}

#[test]
fn worked_example_layout() {
    let mut dpad = DPadWidget::with_config(config()).unwrap();
    dpad.set_captions(Some("A"), Some("B"), Some("C"), Some("D"));

    let mut canvas = renderer();
    dpad.paint(&mut canvas);

    assert_eq!(
        canvas.texts(),
        vec![
            ("A", Point::new(90.0, 50.0)),
            ("B", Point::new(90.0, 170.0)),
            ("C", Point::new(60.0, 110.0)),
            ("D", Point::new(120.0, 110.0)),
        ]
    );
    assert_eq!(
        canvas.stroked_rects()[0],
        Rect::from_ltrb(75.0, 10.0, 105.0, 70.0)
    );
}

#[test]
fn paint_is_idempotent() {
    let mut dpad = painted_widget();

    let mut first = renderer();
    dpad.paint(&mut first);
    let mut second = renderer();
    dpad.paint(&mut second);

    assert_eq!(first.commands(), second.commands());
    assert_eq!(first.commands().len(), 8);
    assert!(matches!(first.commands()[0], DrawCommand::Text { .. }));
    assert!(matches!(first.commands()[1], DrawCommand::StrokeRect { .. }));
}

#[test]
fn absent_captions_become_empty_and_reset_layout() {
    let mut dpad = painted_widget();
    dpad.set_captions(None, Some("S"), None, Some("D"));

    assert_eq!(dpad.button(Direction::Up).caption(), "");
    assert_eq!(dpad.button(Direction::Down).caption(), "S");
    assert_eq!(dpad.button(Direction::Left).caption(), "");
    for (_, button) in dpad.buttons().iter() {
        assert!(button.position().is_none());
        assert!(button.bounding_box().is_none());
    }
    assert!(dpad.needs_repaint());

    // Nothing can be hit until the next paint rebuilds the boxes.
    assert!(dpad.handle_pointer(PointerEvent::down(90.0, 40.0)));
    assert!(!dpad.touch_state().is_dragging());
}

#[test]
fn each_region_dispatches_its_key_pair() {
    for direction in Direction::ALL {
        let mut dpad = painted_widget();
        let seen = record_keys(&mut dpad);

        let p = center_of(&dpad, direction);
        assert!(dpad.handle_pointer(PointerEvent::down(p.x, p.y)));

        let seen = seen.lock();
        assert_eq!(
            *seen,
            vec![
                DirectionKeyEvent::press(direction),
                DirectionKeyEvent::release(direction),
            ]
        );
        assert_eq!(seen[0].key, direction.key_code());
        assert_eq!(seen[1].action, Action::Release);

        match dpad.touch_state() {
            TouchState::Dragging(drag) => assert_eq!(drag.direction, direction),
            TouchState::Idle => panic!("expected a drag for {direction}"),
        }
    }
}

#[test]
fn overlapping_regions_dispatch_the_first_in_order() {
    // (74, 70) lies in both the slop-grown UP and LEFT boxes.
    let mut dpad = painted_widget();
    let seen = record_keys(&mut dpad);
    assert!(dpad.handle_pointer(PointerEvent::down(74.0, 70.0)));
    assert_eq!(
        *seen.lock(),
        vec![
            DirectionKeyEvent::press(Direction::Up),
            DirectionKeyEvent::release(Direction::Up),
        ]
    );

    // (106, 130) lies in both DOWN and RIGHT.
    let mut dpad = painted_widget();
    let seen = record_keys(&mut dpad);
    dpad.handle_pointer(PointerEvent::down(106.0, 130.0));
    let keys: Vec<_> = seen.lock().iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![KeyCode::DpadDown, KeyCode::DpadDown]);
}

#[test]
fn miss_dispatches_nothing() {
    let mut dpad = painted_widget();
    let seen = record_keys(&mut dpad);
    dpad.take_repaint_request();

    assert!(dpad.handle_pointer(PointerEvent::down(500.0, 500.0)));
    assert!(seen.lock().is_empty());
    assert!(!dpad.touch_state().is_dragging());
    assert!(!dpad.needs_repaint());
}

#[test]
fn hit_without_target_still_drags() {
    let mut dpad = painted_widget();
    let taps = Arc::new(Mutex::new(Vec::new()));
    let sink = taps.clone();
    dpad.tapped.connect(move |d| sink.lock().push(*d));

    let p = center_of(&dpad, Direction::Right);
    dpad.handle_pointer(PointerEvent::down(p.x, p.y));

    assert!(dpad.touch_state().is_dragging());
    assert_eq!(*taps.lock(), vec![Direction::Right]);
}

#[test]
fn closure_target_receives_events() {
    let mut dpad = painted_widget();
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    dpad.set_key_target(Arc::new(move |_: &DirectionKeyEvent| {
        *sink.lock() += 1;
        true
    }));

    let p = center_of(&dpad, Direction::Down);
    dpad.handle_pointer(PointerEvent::down(p.x, p.y));
    assert_eq!(*count.lock(), 2);
}

#[test]
fn drag_moves_anchor_and_others_follow() {
    let mut dpad = painted_widget();
    let before = dpad.button(Direction::Left).position().unwrap();

    let start = center_of(&dpad, Direction::Left);
    dpad.handle_pointer(PointerEvent::down(start.x, start.y));
    dpad.handle_pointer(PointerEvent::moved(start.x + 15.0, start.y - 5.0));

    // Only the anchor moves during the drag.
    assert_eq!(
        dpad.button(Direction::Up).position(),
        Some(Point::new(105.0, 45.0))
    );
    assert!(dpad.button(Direction::Up).bounding_box().is_none());
    assert_eq!(dpad.button(Direction::Left).position(), Some(before));

    dpad.handle_pointer(PointerEvent::moved(start.x + 25.0, start.y + 10.0));
    assert_eq!(
        dpad.button(Direction::Up).position(),
        Some(Point::new(115.0, 60.0))
    );

    assert!(dpad.handle_pointer(PointerEvent::up(start.x + 25.0, start.y + 10.0)));
    assert_eq!(*dpad.touch_state(), TouchState::Idle);
    assert!(dpad.take_repaint_request());

    dpad.paint(&mut renderer());
    assert_eq!(
        dpad.button(Direction::Down).position(),
        Some(Point::new(115.0, 180.0))
    );
    assert_eq!(
        dpad.button(Direction::Left).position(),
        Some(Point::new(85.0, 120.0))
    );
    assert_eq!(
        dpad.button(Direction::Right).position(),
        Some(Point::new(145.0, 120.0))
    );
}

#[test]
fn move_and_release_while_idle_are_consumed() {
    let mut dpad = painted_widget();
    let up = dpad.button(Direction::Up).position();

    assert!(dpad.handle_pointer(PointerEvent::moved(10.0, 10.0)));
    assert!(dpad.handle_pointer(PointerEvent::up(10.0, 10.0)));
    assert!(dpad.handle_pointer(PointerEvent::cancel(10.0, 10.0)));

    assert_eq!(*dpad.touch_state(), TouchState::Idle);
    assert_eq!(dpad.button(Direction::Up).position(), up);
}

#[test]
fn cancel_ends_drag() {
    let mut dpad = painted_widget();
    let p = center_of(&dpad, Direction::Up);

    dpad.handle_pointer(PointerEvent::down(p.x, p.y));
    assert!(dpad.handle_pointer(PointerEvent::cancel(p.x, p.y)));
    assert_eq!(*dpad.touch_state(), TouchState::Idle);
}

#[test]
fn down_while_dragging_restarts() {
    let mut dpad = painted_widget();
    let seen = record_keys(&mut dpad);

    let up = center_of(&dpad, Direction::Up);
    dpad.handle_pointer(PointerEvent::down(up.x, up.y));

    let right = center_of(&dpad, Direction::Right);
    assert!(dpad.handle_pointer(PointerEvent::down(right.x, right.y)));

    assert_eq!(seen.lock().len(), 4);
    match dpad.touch_state() {
        TouchState::Dragging(drag) => {
            assert_eq!(drag.direction, Direction::Right);
            assert_eq!(drag.touch_down, right);
        }
        TouchState::Idle => panic!("expected the second down to start a drag"),
    }

    // A second down that misses leaves the widget idle.
    dpad.handle_pointer(PointerEvent::down(500.0, 500.0));
    assert_eq!(*dpad.touch_state(), TouchState::Idle);
}

#[test]
fn padding_and_transform_apply_before_hit_test() {
    let mut dpad = painted_widget();
    dpad.set_padding(Insets::new(10.0, 20.0, 0.0, 0.0));
    dpad.set_view_transform(Transform2D::scale(2.0));

    // Local (90, 40) is inside UP; raw = local * 2 + padding.
    let local = Point::new(90.0, 40.0);
    assert_eq!(dpad.map_to_local(Point::new(190.0, 100.0)), local);

    let seen = record_keys(&mut dpad);
    dpad.handle_pointer(PointerEvent::down(190.0, 100.0));
    assert_eq!(seen.lock()[0].direction, Direction::Up);

    // The same raw point without the transform misses.
    let mut plain = painted_widget();
    plain.handle_pointer(PointerEvent::down(190.0, 100.0));
    assert!(!plain.touch_state().is_dragging());
}

#[test]
fn singular_transform_maps_as_identity() {
    let mut dpad = painted_widget();
    dpad.set_view_transform(Transform2D::scale(0.0));
    assert_eq!(dpad.map_to_local(Point::new(7.0, 9.0)), Point::new(7.0, 9.0));
}

#[test]
fn loads_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        widest_caption = "XX"
        edge_border = 10.0

        [captions]
        up = "W"
        "#
    )
    .unwrap();

    let mut dpad = DPadWidget::from_config_file(file.path()).unwrap();
    dpad.paint(&mut renderer());

    assert_eq!(dpad.button(Direction::Up).caption(), "W");
    assert_eq!(dpad.button(Direction::Right).caption(), "RIGHT");
    // 3 * 10 + 30, 10 + 0.75 * 40
    assert_eq!(
        dpad.button(Direction::Up).position(),
        Some(Point::new(60.0, 40.0))
    );
}

#[test]
fn rejects_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "edge_border = -5.0").unwrap();

    let err = DPadWidget::from_config_file(file.path()).unwrap_err();
    assert!(matches!(err, DPadError::Config(_)));
}
