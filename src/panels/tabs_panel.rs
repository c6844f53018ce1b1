use crate::PlaygroundApp;
use crate::command::Command;

/// One tab per file. Clicking a tab activates it; × asks to delete it.
pub fn tabs_panel(app: &mut PlaygroundApp, ctx: &egui::Context) {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("tabs_panel").show(ctx, |ui| {
        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for tab in &app.renderer.tree().tabs {
                    if ui.selectable_label(tab.active, &tab.label).clicked() {
                        commands.push(Command::Activate(tab.id));
                    }
                    if ui.small_button("×").on_hover_text("Delete File").clicked() {
                        commands.push(Command::DeleteFile(tab.id));
                    }
                    ui.add_space(8.0);
                }
            });
        });
    });

    for command in commands {
        app.submit(command);
    }
}
