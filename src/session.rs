use egui::Pos2;
use log::{debug, info};

use crate::error::{SessionError, SessionResult};
use crate::palette;
use crate::stroke::{MutableStroke, StrokeRef};
use crate::style::{StrokeStyle, StyleUpdate};

/// The drawing state behind one canvas: stroke history, redo buffer,
/// the stroke being dragged and the paint settings for the next stroke.
///
/// The plain operations never fail. Calls that make no sense in the current
/// state (a second `begin_stroke`, an `extend_stroke` with no drag, an
/// `undo` on an empty history) leave the session unchanged. The `try_*`
/// variants report those cases as [`SessionError`] instead.
#[derive(Debug, Default)]
pub struct DrawingSession {
    /// Committed strokes in paint order (first = bottom, last = top)
    committed: Vec<StrokeRef>,
    /// Strokes removed by undo, most recent last
    redo_buffer: Vec<StrokeRef>,
    in_progress: Option<MutableStroke>,
    current_style: StrokeStyle,
}

impl DrawingSession {
    /// Creates an empty session with the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session that starts drawing with `style`
    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            current_style: style,
            ..Self::default()
        }
    }

    pub fn begin_stroke(&mut self, origin: Pos2) {
        absorb("begin_stroke", self.try_begin_stroke(origin));
    }

    pub fn try_begin_stroke(&mut self, origin: Pos2) -> SessionResult<()> {
        if self.in_progress.is_some() {
            return Err(SessionError::StrokeInProgress);
        }
        debug!("Beginning stroke at {:?} with {:?}", origin, self.current_style);
        self.in_progress = Some(MutableStroke::begin(origin, self.current_style));
        Ok(())
    }

    pub fn extend_stroke(&mut self, point: Pos2) {
        absorb("extend_stroke", self.try_extend_stroke(point));
    }

    pub fn try_extend_stroke(&mut self, point: Pos2) -> SessionResult<()> {
        let stroke = self
            .in_progress
            .as_mut()
            .ok_or(SessionError::NoStrokeInProgress)?;
        stroke.extend(point);
        Ok(())
    }

    pub fn commit_stroke(&mut self) {
        absorb("commit_stroke", self.try_commit_stroke().map(|_| ()));
    }

    /// Moves the stroke in progress to the top of the history and drops the redo buffer.
    pub fn try_commit_stroke(&mut self) -> SessionResult<StrokeRef> {
        let stroke = self
            .in_progress
            .take()
            .ok_or(SessionError::NoStrokeInProgress)?
            .finish();
        debug!("Committing stroke with {} points", stroke.points().len());
        self.committed.push(stroke.clone());
        self.redo_buffer.clear();
        Ok(stroke)
    }

    pub fn undo(&mut self) {
        absorb("undo", self.try_undo().map(|_| ()));
    }

    pub fn try_undo(&mut self) -> SessionResult<StrokeRef> {
        let stroke = self.committed.pop().ok_or(SessionError::NothingToUndo)?;
        self.redo_buffer.push(stroke.clone());
        Ok(stroke)
    }

    pub fn redo(&mut self) {
        absorb("redo", self.try_redo().map(|_| ()));
    }

    pub fn try_redo(&mut self) -> SessionResult<StrokeRef> {
        let stroke = self.redo_buffer.pop().ok_or(SessionError::NothingToRedo)?;
        self.committed.push(stroke.clone());
        Ok(stroke)
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// Empties the history and the redo buffer. The stroke in progress and the
    /// current style are left alone.
    pub fn clear(&mut self) {
        info!(
            "Clearing canvas ({} strokes, {} undone)",
            self.committed.len(),
            self.redo_buffer.len()
        );
        self.committed.clear();
        self.redo_buffer.clear();
    }

    /// Changes the style used by strokes begun from now on.
    pub fn set_style(&mut self, update: StyleUpdate) {
        if update.is_empty() {
            return;
        }
        self.current_style = self.current_style.apply(update);
        info!("Current style is now {:?}", self.current_style);
    }

    /// Replaces the color of every committed stroke with its complement.
    ///
    /// Only the committed history is touched: the redo buffer, the stroke in
    /// progress and the current style keep their colors.
    pub fn invert_palette(&mut self) {
        info!("Inverting palette of {} strokes", self.committed.len());
        for stroke in &mut self.committed {
            let inverted = palette::invert(stroke.style().color());
            *stroke = StrokeRef::new(stroke.with_color(inverted));
        }
    }

    pub fn committed(&self) -> &[StrokeRef] {
        &self.committed
    }

    pub fn redo_buffer(&self) -> &[StrokeRef] {
        &self.redo_buffer
    }

    pub fn in_progress(&self) -> Option<&MutableStroke> {
        self.in_progress.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    pub fn current_style(&self) -> &StrokeStyle {
        &self.current_style
    }

    pub fn stroke_count(&self) -> usize {
        self.committed.len()
    }

    /// Everything to paint this frame, bottom to top: the committed strokes
    /// followed by the stroke in progress.
    pub fn render_list(&self) -> impl Iterator<Item = (&[Pos2], &StrokeStyle)> + '_ {
        self.committed
            .iter()
            .map(|stroke| (stroke.points(), stroke.style()))
            .chain(
                self.in_progress
                    .iter()
                    .map(|stroke| (stroke.points(), stroke.style())),
            )
    }
}

fn absorb(operation: &str, result: SessionResult<()>) {
    if let Err(err) = result {
        debug!("Ignoring {}: {}", operation, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use egui::pos2;

    fn session_with_strokes(count: usize) -> DrawingSession {
        let mut session = DrawingSession::new();
        for i in 0..count {
            session.begin_stroke(pos2(i as f32, 0.0));
            session.extend_stroke(pos2(i as f32, 10.0));
            session.commit_stroke();
        }
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = DrawingSession::new();
        assert!(session.committed().is_empty());
        assert!(session.redo_buffer().is_empty());
        assert!(session.in_progress().is_none());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.current_style(), &StrokeStyle::default());
    }

    #[test]
    fn test_double_begin_keeps_first_stroke() {
        let mut session = DrawingSession::new();
        session.begin_stroke(pos2(1.0, 1.0));
        session.begin_stroke(pos2(5.0, 5.0));

        assert_eq!(session.in_progress().unwrap().points(), &[pos2(1.0, 1.0)]);
        assert_eq!(
            session.try_begin_stroke(pos2(5.0, 5.0)),
            Err(SessionError::StrokeInProgress)
        );
    }

    #[test]
    fn test_commit_without_stroke_is_noop() {
        let mut session = session_with_strokes(1);
        session.undo();
        session.commit_stroke();

        assert!(session.committed().is_empty());
        assert_eq!(session.redo_buffer().len(), 1);
        assert_eq!(
            session.try_commit_stroke(),
            Err(SessionError::NoStrokeInProgress)
        );
    }

    #[test]
    fn test_undo_redo_on_empty_buffers() {
        let mut session = DrawingSession::new();
        session.undo();
        session.redo();
        assert!(session.committed().is_empty());
        assert_eq!(session.try_undo(), Err(SessionError::NothingToUndo));
        assert_eq!(session.try_redo(), Err(SessionError::NothingToRedo));
    }

    #[test]
    fn test_clear_keeps_stroke_in_progress_and_style() {
        let mut session = session_with_strokes(2);
        session.set_style(StyleUpdate::color(Color::GREEN));
        session.undo();
        session.begin_stroke(pos2(0.0, 0.0));

        session.clear();

        assert!(session.committed().is_empty());
        assert!(session.redo_buffer().is_empty());
        assert!(session.is_drawing());
        assert_eq!(session.current_style().color(), Color::GREEN);
    }

    #[test]
    fn test_style_is_captured_at_begin() {
        let mut session = DrawingSession::new();
        session.begin_stroke(pos2(0.0, 0.0));
        session.set_style(StyleUpdate::width(20.0));
        session.extend_stroke(pos2(1.0, 1.0));
        session.commit_stroke();

        assert_eq!(session.committed()[0].style().width(), 5.0);
        assert_eq!(session.current_style().width(), 20.0);
    }

    #[test]
    fn test_invert_palette_leaves_redo_buffer_and_current_style() {
        let mut session = DrawingSession::new();
        session.set_style(StyleUpdate::color(Color::RED));
        session.begin_stroke(pos2(0.0, 0.0));
        session.commit_stroke();
        session.begin_stroke(pos2(1.0, 1.0));
        session.commit_stroke();
        session.undo();
        session.begin_stroke(pos2(2.0, 2.0));

        session.invert_palette();

        assert_eq!(session.committed()[0].style().color(), Color::CYAN);
        assert_eq!(session.redo_buffer()[0].style().color(), Color::RED);
        assert_eq!(session.in_progress().unwrap().style().color(), Color::RED);
        assert_eq!(session.current_style().color(), Color::RED);
    }

    #[test]
    fn test_render_list_puts_stroke_in_progress_last() {
        let mut session = session_with_strokes(2);
        session.begin_stroke(pos2(42.0, 42.0));

        let points: Vec<Pos2> = session.render_list().map(|(points, _)| points[0]).collect();
        assert_eq!(points, vec![pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(42.0, 42.0)]);
    }
}
