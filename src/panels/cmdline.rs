use eframe::egui;

use crate::console::Console;
use crate::input::UiEvent;
use crate::session::Session;

/// Command entry with history recall and a `Run` button; Enter also submits
pub fn cmdline_panel(ui: &mut egui::Ui, session: &mut Session, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        let entry = ui.add(
            egui::TextEdit::singleline(&mut session.widgets.cmdline)
                .id_salt("_cmdline_")
                .hint_text("forward 50 left 90 ...")
                .desired_width(480.0),
        );

        egui::ComboBox::from_id_salt("_cmdline_history_")
            .selected_text("History")
            .show_ui(ui, |ui| {
                for line in session.history.entries().iter().rev() {
                    if ui.selectable_label(false, line.as_str()).clicked() {
                        session.widgets.cmdline = line.clone();
                    }
                }
            });

        let submitted = entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Run").clicked() || submitted {
            events.push(UiEvent::from_key("Run"));
            entry.request_focus();
        }
    });
}

/// Read-only transcript that keeps the newest line in view
pub fn console_panel(ui: &mut egui::Ui, console: &Console) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::vertical()
            .id_salt("_console_")
            .max_height(110.0)
            .stick_to_bottom(true)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for line in console.lines() {
                    ui.monospace(line);
                }
            });
    });
}
