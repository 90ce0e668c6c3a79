mod canvas_panel;
mod cmdline;
mod controls;
mod toolbar;

pub use canvas_panel::canvas_panel;
pub use cmdline::{cmdline_panel, console_panel};
pub use controls::{ControlTab, controls_panel};
pub use toolbar::toolbar_panel;

use eframe::egui;

use crate::input::UiEvent;

/// A framed, centred line of text (banner, header, footer and status rows)
pub fn text_row(ui: &mut egui::Ui, text: &str, heading: bool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            if heading {
                ui.heading(text);
            } else {
                ui.label(text);
            }
        });
    });
}

/// A button that raises its own label as the event key
pub(crate) fn event_button(ui: &mut egui::Ui, label: &str, events: &mut Vec<UiEvent>) {
    if ui.button(label).clicked() {
        events.push(UiEvent::from_key(label));
    }
}

/// Raise the wrapped widget key when `changed` is set
pub(crate) fn widget_event(changed: bool, key: &str, events: &mut Vec<UiEvent>) {
    if changed {
        events.push(UiEvent::from_key(&format!("_{key}_")));
    }
}
