use egui::{Color32, Sense};

use crate::DoodlerApp;
use crate::style::{Color, OPACITY_OPTIONS, PaletteColor, StrokeStyle, StyleUpdate, WIDTH_OPTIONS};

const SWATCH_SIZE: f32 = 40.0;

/// The style picker dialogs reachable from the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Color,
    BrushSize,
    Opacity,
}

impl Picker {
    pub fn title(self) -> &'static str {
        match self {
            Self::Color => "Select Color",
            Self::BrushSize => "Select Brush Size",
            Self::Opacity => "Select Opacity",
        }
    }
}

/// Show the open picker, if any. Picking an option applies it and closes the dialog.
pub fn picker_window(app: &mut DoodlerApp, ctx: &egui::Context) {
    let Some(picker) = app.open_picker() else {
        return;
    };

    let current = *app.session().current_style();
    let mut open = true;
    let mut selection = None;

    egui::Window::new(picker.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            selection = match picker {
                Picker::Color => color_options(ui, &current),
                Picker::BrushSize => size_options(ui, &current),
                Picker::Opacity => opacity_options(ui, &current),
            };
        });

    if let Some(update) = selection {
        app.select_style(update);
    } else if !open {
        app.close_picker();
    }
}

/// Outline the option matching the current style
fn mark_current(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_stroke(rect.expand(2.0), 4.0, ui.visuals().selection.stroke);
}

fn is_current_value(current: f32, option: f32) -> bool {
    (current - option).abs() <= f32::EPSILON
}

fn color_options(ui: &mut egui::Ui, current: &StrokeStyle) -> Option<StyleUpdate> {
    let mut selection = None;
    for row in PaletteColor::ALL.chunks(4) {
        ui.horizontal(|ui| {
            for palette_color in row {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
                ui.painter()
                    .rect_filled(rect, 4.0, palette_color.color().to_color32(1.0));
                if palette_color.color() == current.color() {
                    mark_current(ui, rect);
                }
                if response.on_hover_text(palette_color.name()).clicked() {
                    selection = Some(StyleUpdate::color(palette_color.color()));
                }
            }
        });
    }
    selection
}

fn size_options(ui: &mut egui::Ui, current: &StrokeStyle) -> Option<StyleUpdate> {
    let mut selection = None;
    let width = ui.available_width().max(120.0);
    for size in WIDTH_OPTIONS {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(width, size + 8.0), Sense::click());
        let bar = egui::Rect::from_center_size(rect.center(), egui::vec2(width, size));
        ui.painter().rect_filled(bar, 0.0, Color32::BLACK);
        if is_current_value(current.width(), size) {
            mark_current(ui, rect);
        }
        if response.on_hover_text(format!("{size}")).clicked() {
            selection = Some(StyleUpdate::width(size));
        }
    }
    selection
}

fn opacity_options(ui: &mut egui::Ui, current: &StrokeStyle) -> Option<StyleUpdate> {
    let mut selection = None;
    for alpha in OPACITY_OPTIONS {
        ui.horizontal(|ui| {
            let (rect, swatch) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            let fill = Color::BLACK.to_color32(alpha);
            ui.painter().rect_filled(rect, 0.0, fill);
            if is_current_value(current.opacity(), alpha) {
                mark_current(ui, rect);
            }

            let percentage = (alpha * 100.0) as u32;
            let label = ui.add(egui::Label::new(format!("{percentage}%")).sense(Sense::click()));
            if swatch.clicked() || label.clicked() {
                selection = Some(StyleUpdate::opacity(alpha));
            }
        });
    }
    selection
}
