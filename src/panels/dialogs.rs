use crate::PlaygroundApp;
use crate::command::Command;
use crate::language::Language;

/// New-file form, confirmation prompt and notices, in that order of priority.
pub fn dialogs(app: &mut PlaygroundApp, ctx: &egui::Context) {
    new_file_dialog(app, ctx);
    confirmation_dialog(app, ctx);
    notice_dialog(app, ctx);
}

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
}

fn new_file_dialog(app: &mut PlaygroundApp, ctx: &egui::Context) {
    if !app.dialog.open {
        return;
    }

    let mut create = false;
    let mut cancel = false;
    modal("New File").show(ctx, |ui| {
        egui::Grid::new("new_file_grid").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut app.dialog.name);
            ui.end_row();

            ui.label("Language:");
            egui::ComboBox::from_id_salt("new_file_language")
                .selected_text(app.dialog.language.label())
                .show_ui(ui, |ui| {
                    for language in Language::ALL {
                        let label = language.label().to_owned();
                        ui.selectable_value(&mut app.dialog.language, language, label);
                    }
                });
            ui.end_row();
        });

        ui.horizontal(|ui| {
            create = ui.button("Create").clicked();
            cancel = ui.button("Cancel").clicked();
        });
    });

    if create {
        let command = Command::CreateFile {
            name: app.dialog.name.clone(),
            language: app.dialog.language.clone(),
        };
        // An empty name keeps the form open behind the notice
        if !app.dialog.name.trim().is_empty() {
            app.dialog.reset();
        }
        app.submit(command);
    } else if cancel {
        app.dialog.reset();
    }
}

fn confirmation_dialog(app: &mut PlaygroundApp, ctx: &egui::Context) {
    let Some(prompt) = app.pending().map(|pending| pending.prompt.clone()) else {
        return;
    };

    let mut answer = None;
    modal("Confirm").show(ctx, |ui| {
        ui.label(prompt);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                answer = Some(true);
            }
            if ui.button("Cancel").clicked() {
                answer = Some(false);
            }
        });
    });

    if let Some(accepted) = answer {
        app.confirm(accepted);
    }
}

fn notice_dialog(app: &mut PlaygroundApp, ctx: &egui::Context) {
    let Some(message) = app.notices.front().cloned() else {
        return;
    };

    let mut dismissed = false;
    modal("Notice").show(ctx, |ui| {
        ui.label(message);
        dismissed = ui.button("OK").clicked();
    });

    if dismissed {
        app.notices.pop_front();
    }
}
