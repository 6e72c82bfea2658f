// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::session::DrawingSession;
use crate::style::StrokeStyle;

/// Paints a drawing session onto an egui canvas.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    /// Renders the session into `rect`
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas area; session coordinates are relative to its top-left corner
    ///     session (DrawingSession): Strokes to draw, bottom to top
    pub fn render(&self, painter: &Painter, rect: Rect, session: &DrawingSession) {
        painter.rect_filled(rect, 0.0, self.background);

        let offset = rect.min.to_vec2();
        let shapes: Vec<Shape> = session
            .render_list()
            .filter_map(|(points, style)| stroke_shape(points, style, offset))
            .collect();
        painter.with_clip_rect(rect).extend(shapes);
    }
}

/// The shape for one stroke translated by `offset`.
///
/// Two or more points become a polyline. A single point (a tap without a drag)
/// becomes a dot as wide as the stroke. An empty stroke draws nothing.
pub fn stroke_shape(points: &[Pos2], style: &StrokeStyle, offset: Vec2) -> Option<Shape> {
    let color = style.paint_color();
    match points {
        [] => None,
        [point] => Some(Shape::circle_filled(*point + offset, style.width() / 2.0, color)),
        _ => Some(Shape::line(
            points.iter().map(|point| *point + offset).collect(),
            EguiStroke::new(style.width(), color),
        )),
    }
}
