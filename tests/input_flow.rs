use eframe_doodler::input::{DragState, GestureConfig, GestureRecognizer};
use eframe_doodler::{Color, DrawingSession, InputController, InputEvent};
use egui::pos2;

fn gestures() -> GestureRecognizer {
    GestureRecognizer::new(GestureConfig {
        touch_slop: 4.0,
        long_press_secs: 0.5,
    })
}

#[test]
fn test_drag_draws_a_stroke() {
    let mut gestures = gestures();
    let mut controller = InputController::new();
    let mut session = DrawingSession::new();

    let mut events = gestures.press(pos2(10.0, 10.0), 0.0);
    events.extend(gestures.moved(pos2(20.0, 10.0), 0.05));
    events.extend(gestures.moved(pos2(30.0, 15.0), 0.1));
    controller.handle_events(events, &mut session);
    assert_eq!(controller.state(), DragState::Dragging);
    assert!(session.is_drawing());
    assert!(session.committed().is_empty());

    controller.handle_events(gestures.release(0.2), &mut session);

    assert_eq!(controller.state(), DragState::Idle);
    assert_eq!(
        session.committed()[0].points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(30.0, 15.0)]
    );
}

#[test]
fn test_long_press_inverts_committed_strokes_only() {
    let mut gestures = gestures();
    let mut controller = InputController::new();
    let mut session = DrawingSession::new();

    controller.handle_events(
        [
            InputEvent::PointerDown { position: pos2(0.0, 0.0) },
            InputEvent::PointerMove { position: pos2(5.0, 5.0) },
            InputEvent::PointerUp,
        ],
        &mut session,
    );

    gestures.press(pos2(40.0, 40.0), 1.0);
    controller.handle_events(gestures.tick(1.6), &mut session);
    controller.handle_events(gestures.moved(pos2(80.0, 80.0), 1.7), &mut session);
    controller.handle_events(gestures.release(1.8), &mut session);

    assert_eq!(session.committed().len(), 1);
    assert_eq!(session.committed()[0].style().color(), Color::WHITE);
    assert_eq!(session.current_style().color(), Color::BLACK);
    assert_eq!(controller.state(), DragState::Idle);
}

#[test]
fn test_tap_draws_nothing() {
    let mut gestures = gestures();
    let mut controller = InputController::new();
    let mut session = DrawingSession::new();

    let mut events = gestures.press(pos2(3.0, 3.0), 0.0);
    events.extend(gestures.moved(pos2(4.0, 3.0), 0.05));
    events.extend(gestures.release(0.1));
    controller.handle_events(events, &mut session);

    assert!(session.committed().is_empty());
    assert!(!session.is_drawing());
}
