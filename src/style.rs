use egui::Color32;
use serde::{Deserialize, Serialize};

/// Thinnest stroke a style can carry.
pub const MIN_WIDTH: f32 = 0.1;

/// Brush widths offered by the size picker, in points.
pub const WIDTH_OPTIONS: [f32; 5] = [2.0, 5.0, 10.0, 15.0, 20.0];

/// Opacities offered by the opacity picker.
pub const OPACITY_OPTIONS: [f32; 5] = [1.0, 0.75, 0.5, 0.25, 0.1];

/// An RGBA color with unmultiplied 8-bit channels.
///
/// egui's `Color32` is premultiplied, which would make a channel-wise complement
/// depend on alpha. Keeping the channels unmultiplied keeps inversion exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::opaque(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::opaque(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::opaque(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::opaque(0x00, 0x00, 0xFF);
    pub const YELLOW: Color = Color::opaque(0xFF, 0xFF, 0x00);
    pub const MAGENTA: Color = Color::opaque(0xFF, 0x00, 0xFF);
    pub const CYAN: Color = Color::opaque(0x00, 0xFF, 0xFF);
    pub const GRAY: Color = Color::opaque(0x88, 0x88, 0x88);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Convert to an egui color, composing the color's own alpha with `opacity`.
    pub fn to_color32(self, opacity: f32) -> Color32 {
        let alpha = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Color32::from_rgba_unmultiplied(self.r, self.g, self.b, alpha)
    }
}

/// The colors offered by the color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Gray,
}

impl PaletteColor {
    /// Picker order: two rows of four.
    pub const ALL: [PaletteColor; 8] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Yellow,
        PaletteColor::Magenta,
        PaletteColor::Cyan,
        PaletteColor::Gray,
    ];

    pub fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::Red => Color::RED,
            Self::Green => Color::GREEN,
            Self::Blue => Color::BLUE,
            Self::Yellow => Color::YELLOW,
            Self::Magenta => Color::MAGENTA,
            Self::Cyan => Color::CYAN,
            Self::Gray => Color::GRAY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Magenta => "Magenta",
            Self::Cyan => "Cyan",
            Self::Gray => "Gray",
        }
    }
}

/// Paint settings captured by a stroke when it begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    color: Color,
    width: f32,
    opacity: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 5.0, 1.0)
    }
}

impl StrokeStyle {
    /// Opacity is clamped to `[0, 1]` and width to at least [`MIN_WIDTH`].
    pub fn new(color: Color, width: f32, opacity: f32) -> Self {
        let width = if width.is_finite() { width.max(MIN_WIDTH) } else { MIN_WIDTH };
        let opacity = if opacity.is_nan() { 1.0 } else { opacity.clamp(0.0, 1.0) };
        Self { color, width, opacity }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// The color egui should paint with: `color.alpha × opacity`.
    pub fn paint_color(&self) -> Color32 {
        self.color.to_color32(self.opacity)
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Produce a new style with the fields present in `update` replaced.
    pub fn apply(self, update: StyleUpdate) -> Self {
        Self::new(
            update.color.unwrap_or(self.color),
            update.width.unwrap_or(self.width),
            update.opacity.unwrap_or(self.opacity),
        )
    }
}

/// A partial change to the current style, as produced by one picker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleUpdate {
    pub color: Option<Color>,
    pub width: Option<f32>,
    pub opacity: Option<f32>,
}

impl StyleUpdate {
    pub fn color(color: Color) -> Self {
        Self { color: Some(color), ..Default::default() }
    }

    pub fn width(width: f32) -> Self {
        Self { width: Some(width), ..Default::default() }
    }

    pub fn opacity(opacity: f32) -> Self {
        Self { opacity: Some(opacity), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.width.is_none() && self.opacity.is_none()
    }
}
