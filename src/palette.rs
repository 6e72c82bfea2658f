//! Palette inversion for committed strokes.

use crate::style::Color;

/// Channel-wise complement of `color`: `255 - channel` for red, green and blue.
/// Alpha is left as it is.
pub fn invert(color: Color) -> Color {
    Color {
        r: u8::MAX - color.r,
        g: u8::MAX - color.g,
        b: u8::MAX - color.b,
        a: color.a,
    }
}
