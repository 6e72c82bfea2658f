use egui::Pos2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::InputEvent;

/// Configuration for gesture recognition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Distance a press must travel before it becomes a drag
    pub touch_slop: f32,
    /// Time a press must be held still to count as a long press (seconds)
    pub long_press_secs: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            long_press_secs: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PressPhase {
    /// Held down, not yet a drag or a long press
    Pending,
    Dragging,
    /// Long press already fired; the rest of this press is ignored
    LongPressed,
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Pos2,
    /// Last position seen for this press
    last_pos: Pos2,
    started_at: f64,
    phase: PressPhase,
}

/// Turns raw press/move/release samples of a single pointer into drag and
/// long-press events.
///
/// A press becomes a drag once it leaves the touch slop around its origin, and
/// a long press if it stays inside the slop for `long_press_secs`. A press that
/// is released before either happens is a tap and produces nothing.
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    config: GestureConfig,
    press: Option<Press>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self { config, press: None }
    }

    /// True while a pointer is held down on the canvas.
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn press(&mut self, pos: Pos2, time: f64) -> Vec<InputEvent> {
        let mut events = Vec::new();
        // A press we never saw released still owes its drag an end.
        if let Some(press) = self.press.take() {
            if press.phase == PressPhase::Dragging {
                events.push(InputEvent::PointerUp);
            }
        }
        self.press = Some(Press {
            origin: pos,
            last_pos: pos,
            started_at: time,
            phase: PressPhase::Pending,
        });
        events
    }

    pub fn moved(&mut self, pos: Pos2, time: f64) -> Vec<InputEvent> {
        let mut events = self.tick(time);
        let slop = self.config.touch_slop;
        if let Some(press) = &mut self.press {
            // Repaints report the held pointer again; only real movement extends a stroke
            if press.last_pos == pos {
                return events;
            }
            press.last_pos = pos;
            match press.phase {
                PressPhase::Pending if press.origin.distance(pos) > slop => {
                    press.phase = PressPhase::Dragging;
                    events.push(InputEvent::PointerDown { position: press.origin });
                    events.push(InputEvent::PointerMove { position: pos });
                }
                PressPhase::Dragging => events.push(InputEvent::PointerMove { position: pos }),
                _ => {}
            }
        }
        events
    }

    /// Advance the clock; fires the long press once it is due.
    pub fn tick(&mut self, time: f64) -> Vec<InputEvent> {
        let long_press_secs = self.config.long_press_secs;
        match &mut self.press {
            Some(press)
                if press.phase == PressPhase::Pending
                    && time - press.started_at >= long_press_secs =>
            {
                debug!("Long press at {:?}", press.origin);
                press.phase = PressPhase::LongPressed;
                vec![InputEvent::LongPress]
            }
            _ => Vec::new(),
        }
    }

    pub fn release(&mut self, time: f64) -> Vec<InputEvent> {
        let mut events = self.tick(time);
        if let Some(press) = self.press.take() {
            if press.phase == PressPhase::Dragging {
                events.push(InputEvent::PointerUp);
            }
        }
        events
    }

    /// Seconds until the current press turns into a long press, if one is pending.
    pub fn time_to_long_press(&self, time: f64) -> Option<f64> {
        self.press
            .filter(|press| press.phase == PressPhase::Pending)
            .map(|press| (press.started_at + self.config.long_press_secs - time).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig {
            touch_slop: 5.0,
            long_press_secs: 0.5,
        })
    }

    #[test]
    fn test_drag_starts_after_slop() {
        let mut gestures = recognizer();
        assert!(gestures.press(pos2(0.0, 0.0), 0.0).is_empty());
        assert!(gestures.moved(pos2(3.0, 0.0), 0.05).is_empty());

        let events = gestures.moved(pos2(10.0, 0.0), 0.1);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown { position: pos2(0.0, 0.0) },
                InputEvent::PointerMove { position: pos2(10.0, 0.0) },
            ]
        );

        let events = gestures.moved(pos2(10.0, 2.0), 0.2);
        assert_eq!(events, vec![InputEvent::PointerMove { position: pos2(10.0, 2.0) }]);

        assert_eq!(gestures.release(0.3), vec![InputEvent::PointerUp]);
        assert!(!gestures.is_pressed());
    }

    #[test]
    fn test_tap_produces_nothing() {
        let mut gestures = recognizer();
        gestures.press(pos2(1.0, 1.0), 0.0);
        assert!(gestures.release(0.1).is_empty());
    }

    #[test]
    fn test_long_press_fires_once_and_suppresses_drawing() {
        let mut gestures = recognizer();
        gestures.press(pos2(1.0, 1.0), 0.0);
        assert!(gestures.tick(0.3).is_empty());
        assert_eq!(gestures.time_to_long_press(0.3), Some(0.2));

        assert_eq!(gestures.tick(0.5), vec![InputEvent::LongPress]);
        assert!(gestures.tick(0.9).is_empty());
        assert_eq!(gestures.time_to_long_press(0.9), None);

        assert!(gestures.moved(pos2(50.0, 50.0), 1.0).is_empty());
        assert!(gestures.release(1.1).is_empty());
    }

    #[test]
    fn test_dragging_never_long_presses() {
        let mut gestures = recognizer();
        gestures.press(pos2(0.0, 0.0), 0.0);
        gestures.moved(pos2(20.0, 0.0), 0.1);
        assert!(gestures.tick(2.0).is_empty());
        assert_eq!(gestures.release(2.1), vec![InputEvent::PointerUp]);
    }

    #[test]
    fn test_repeated_position_is_not_a_move() {
        let mut gestures = recognizer();
        gestures.press(pos2(0.0, 0.0), 0.0);
        assert_eq!(gestures.moved(pos2(20.0, 0.0), 0.1).len(), 2);

        for frame in 1..=5 {
            assert!(gestures.moved(pos2(20.0, 0.0), 0.1 + frame as f64 * 0.01).is_empty());
        }
        assert_eq!(
            gestures.moved(pos2(21.0, 0.0), 0.2),
            vec![InputEvent::PointerMove { position: pos2(21.0, 0.0) }]
        );
    }

    #[test]
    fn test_new_press_ends_unreleased_drag() {
        let mut gestures = recognizer();
        gestures.press(pos2(0.0, 0.0), 0.0);
        gestures.moved(pos2(20.0, 0.0), 0.1);
        assert_eq!(gestures.press(pos2(5.0, 5.0), 0.2), vec![InputEvent::PointerUp]);
    }
}
