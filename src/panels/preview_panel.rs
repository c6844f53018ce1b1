use crate::PlaygroundApp;

pub fn preview_panel(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::SidePanel::right("preview_panel")
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Preview");
                ui.weak(format!("#{}", app.frame.lock().generation()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.checkbox(&mut app.prefs.show_preview_source, "Source");
                });
            });
            ui.separator();

            #[cfg(not(target_arch = "wasm32"))]
            ui.label(format!("Open {} in a browser to view it.", app.preview_path.display()));

            #[cfg(target_arch = "wasm32")]
            if !app.prefs.show_preview_source {
                let rect = ui.available_rect_before_wrap();
                let scale = crate::preview::css_per_point(ui.ctx());
                if let Err(err) = app.iframe.place(rect, scale) {
                    log::warn!("Could not place preview frame: {}", err);
                }
            } else if let Err(err) = app.iframe.hide() {
                log::warn!("Could not hide preview frame: {}", err);
            }

            if app.prefs.show_preview_source {
                let frame = app.frame.lock();
                let mut document = frame.document();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut document)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
            }
        });
}
