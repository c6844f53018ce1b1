use crate::PlaygroundApp;
use crate::command::Command;

/// The editor for the active file.
pub fn central_panel(app: &mut PlaygroundApp, ctx: &egui::Context) {
    let mut edit = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let Some((id, header, placeholder)) = app
            .renderer
            .tree()
            .active_panel()
            .map(|panel| (panel.id, panel.header.clone(), panel.placeholder.clone()))
        else {
            ui.centered_and_justified(|ui| ui.label("No File Selected"));
            return;
        };

        ui.strong(header);
        ui.separator();

        let Some(buffer) = app.renderer.buffer_mut(id) else {
            return;
        };
        egui::ScrollArea::vertical().show(ui, |ui| {
            let response = ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(buffer)
                    .code_editor()
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                edit = Some(Command::Edit {
                    id,
                    content: buffer.clone(),
                });
            }
        });
    });

    if let Some(command) = edit {
        app.submit(command);
    }
}
