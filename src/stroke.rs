use egui::Pos2;
use std::sync::Arc;

use crate::style::{Color, StrokeStyle};

// Immutable stroke, shared between the history and the redo buffer
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    style: StrokeStyle,
}

// Mutable stroke for the drag in progress
#[derive(Clone, Debug)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    style: StrokeStyle,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(points: Vec<Pos2>, style: StrokeStyle) -> Self {
        Self { points, style }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// A copy of this stroke painted with `color`; points, width and opacity are kept.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            points: self.points.clone(),
            style: self.style.with_color(color),
        }
    }
}

impl MutableStroke {
    // Start a stroke at the pointer-down position
    pub fn begin(origin: Pos2, style: StrokeStyle) -> Self {
        Self {
            points: vec![origin],
            style,
        }
    }

    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    // Freeze into an immutable, shareable stroke
    pub fn finish(self) -> StrokeRef {
        Arc::new(Stroke::new(self.points, self.style))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_begin_holds_single_point() {
        let stroke = MutableStroke::begin(pos2(3.0, 4.0), StrokeStyle::default());
        assert_eq!(stroke.points(), &[pos2(3.0, 4.0)]);
    }

    #[test]
    fn test_finish_keeps_points_in_order() {
        let style = StrokeStyle::new(Color::BLUE, 10.0, 0.5);
        let mut stroke = MutableStroke::begin(pos2(0.0, 0.0), style);
        stroke.extend(pos2(1.0, 0.0));
        stroke.extend(pos2(1.0, 1.0));

        let frozen = stroke.finish();
        assert_eq!(frozen.points(), &[pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(1.0, 1.0)]);
        assert_eq!(frozen.style(), &style);
    }

    #[test]
    fn test_with_color_only_changes_color() {
        let style = StrokeStyle::new(Color::RED, 2.0, 0.25);
        let stroke = Stroke::new(vec![pos2(1.0, 2.0), pos2(3.0, 4.0)], style);

        let recolored = stroke.with_color(Color::CYAN);
        assert_eq!(recolored.points(), stroke.points());
        assert_eq!(recolored.style().color(), Color::CYAN);
        assert_eq!(recolored.style().width(), 2.0);
        assert_eq!(recolored.style().opacity(), 0.25);
    }
}
