use crate::PlaygroundApp;
use crate::command::Command;
use crate::theme::Theme;

pub fn toolbar(app: &mut PlaygroundApp, ctx: &egui::Context) {
    let mut commands = Vec::new();
    let mut download = false;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("▶ Run").clicked() {
                commands.push(Command::Run);
            }
            if ui.button("Clear").clicked() {
                commands.push(Command::ClearActive);
            }
            if ui.button("New File").clicked() {
                app.dialog.open = true;
            }

            ui.separator();

            if ui.button("Save").clicked() {
                commands.push(Command::Save);
            }
            if ui.button("Load").clicked() {
                commands.push(Command::Load);
            }
            if ui.button("Download").clicked() {
                download = true;
            }

            ui.separator();

            let mut auto_run = app.session.auto_run();
            if ui.checkbox(&mut auto_run, "Auto-run").changed() {
                commands.push(Command::SetAutoRun(auto_run));
            }

            let mut theme = app.session.theme();
            egui::ComboBox::from_label("Theme")
                .selected_text(theme.name())
                .show_ui(ui, |ui| {
                    for option in Theme::ALL {
                        ui.selectable_value(&mut theme, option, option.name());
                    }
                });
            if theme != app.session.theme() {
                commands.push(Command::SetTheme(theme));
            }
        });
    });

    for command in commands {
        app.submit(command);
    }
    if download {
        app.download();
    }
}
