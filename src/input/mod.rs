use egui::{Context, Pos2, Response};
use std::time::Duration;

mod controller;
mod gestures;

pub use controller::{DragState, InputController};
pub use gestures::{GestureConfig, GestureRecognizer};

/// Canvas input events, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A drag started at this position
    PointerDown { position: Pos2 },
    /// The dragged pointer moved here
    PointerMove { position: Pos2 },
    /// The drag ended
    PointerUp,
    /// The pointer was held still on the canvas
    LongPress,
}

/// Handles converting raw egui pointer input over the canvas into our InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    gestures: GestureRecognizer,
}

impl InputHandler {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            gestures: GestureRecognizer::new(config),
        }
    }

    /// Process this frame's primary-pointer input for the canvas widget `canvas`.
    ///
    /// Only presses that start on the canvas are tracked; once tracked, the press
    /// is followed until release even if the pointer leaves the canvas.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let origin = canvas.rect.min;
        let starts_on_canvas = canvas.contains_pointer();

        let (events, time) = ctx.input(|input| {
            let time = input.time;
            let pos = input.pointer.interact_pos().map(|pos| Pos2::ZERO + (pos - origin));
            let mut events = Vec::new();

            if input.pointer.primary_pressed() && starts_on_canvas {
                if let Some(pos) = pos {
                    events.extend(self.gestures.press(pos, time));
                }
            }

            if self.gestures.is_pressed() {
                if let Some(pos) = pos {
                    events.extend(self.gestures.moved(pos, time));
                }
                if input.pointer.primary_released() || !input.pointer.primary_down() {
                    events.extend(self.gestures.release(time));
                } else {
                    events.extend(self.gestures.tick(time));
                }
            }

            (events, time)
        });

        // Nothing else may move while the pointer is held still, so wake up for the long press.
        if let Some(secs) = self.gestures.time_to_long_press(time) {
            ctx.request_repaint_after(Duration::from_secs_f64(secs));
        }

        events
    }
}
