use crate::DoodlerApp;
use crate::panels::Picker;

pub fn top_bar(app: &mut DoodlerApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(app.title().to_owned());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left, so listed in reverse of how they appear
                if ui.button("Opacity").clicked() {
                    app.show_picker(Picker::Opacity);
                }
                if ui.button("Brush Size").clicked() {
                    app.show_picker(Picker::BrushSize);
                }
                if ui.button("Color").clicked() {
                    app.show_picker(Picker::Color);
                }
                if ui.button("Clear").clicked() {
                    log::info!("Clear pressed");
                    app.clear();
                }
            });
        });
    });
}
