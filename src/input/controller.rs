use log::trace;

use super::InputEvent;
use crate::session::DrawingSession;

/// Whether a drag is currently feeding a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Drives a [`DrawingSession`] from pointer events.
///
/// Idle -> Dragging on pointer-down (begins a stroke), Dragging -> Dragging on
/// pointer-move (extends it), Dragging -> Idle on pointer-up (commits it).
/// A long press inverts the palette in either state without changing it.
/// Every other event is dropped.
#[derive(Debug, Default)]
pub struct InputController {
    state: DragState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn handle_event(&mut self, event: InputEvent, session: &mut DrawingSession) {
        match (self.state, event) {
            (DragState::Idle, InputEvent::PointerDown { position }) => {
                session.begin_stroke(position);
                self.state = DragState::Dragging;
            }
            (DragState::Dragging, InputEvent::PointerMove { position }) => {
                session.extend_stroke(position);
            }
            (DragState::Dragging, InputEvent::PointerUp) => {
                session.commit_stroke();
                self.state = DragState::Idle;
            }
            (_, InputEvent::LongPress) => session.invert_palette(),
            (state, event) => trace!("Ignoring {:?} while {:?}", event, state),
        }
    }

    pub fn handle_events(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        session: &mut DrawingSession,
    ) {
        for event in events {
            self.handle_event(event, session);
        }
    }
}
