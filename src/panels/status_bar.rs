use crate::PlaygroundApp;

pub fn status_bar(app: &mut PlaygroundApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let store = app.session.store();
            ui.label(format!("{} files", store.len()));
            if let Some(file) = store.active() {
                ui.separator();
                ui.label(format!("{} · {}", file.name, file.language));
            }
            if let Some(event) = app.recorder.last() {
                ui.separator();
                ui.weak(format!("{:?}", event));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(format!("FPS: {}", app.fps.fps()));
            });
        });
    });
}
