use std::ops::RangeInclusive;

use eframe::egui;

/// A caption followed by a numeric spinner clamped to `range`
pub struct SpinBox<'a> {
    pub label: &'a str,
    pub value: &'a mut u32,
    pub range: RangeInclusive<u32>,
}

impl<'a> SpinBox<'a> {
    pub fn new(label: &'a str, value: &'a mut u32, range: RangeInclusive<u32>) -> Self {
        Self {
            label,
            value,
            range,
        }
    }

    /// Returns the spinner's response; `changed()` is set when the value moved
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        ui.label(self.label);
        ui.add(
            egui::DragValue::new(self.value)
                .range(self.range)
                .speed(1.0),
        )
    }
}
