use eframe::egui;

use super::{event_button, widget_event};
use crate::components::SpinBox;
use crate::config::{CANVAS_HEIGHT_RANGE, CANVAS_WIDTH_RANGE};
use crate::input::UiEvent;
use crate::session::WidgetValues;

/// Canvas size spinners plus the `Clear` and `Home` buttons
pub fn toolbar_panel(ui: &mut egui::Ui, widgets: &mut WidgetValues, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        let width = SpinBox::new("Canvas", &mut widgets.canvas_width, CANVAS_WIDTH_RANGE).show(ui);
        widget_event(width.changed(), "canvasWidth", events);

        let height = SpinBox::new("x", &mut widgets.canvas_height, CANVAS_HEIGHT_RANGE).show(ui);
        widget_event(height.changed(), "canvasHeight", events);

        ui.separator();
        event_button(ui, "Clear", events);
        event_button(ui, "Home", events);
    });
}
