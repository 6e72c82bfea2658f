use crate::DoodlerApp;

pub fn central_panel(app: &mut DoodlerApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

            app.process_canvas_input(ctx, &response);

            app.renderer().render(&painter, response.rect, app.session());
        });
}

/// Undo/Redo buttons floating in the bottom-left corner of the canvas
pub fn history_controls(app: &mut DoodlerApp, ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("history_controls"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;

                let can_undo = app.session().can_undo();
                let can_redo = app.session().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });
        });
}
