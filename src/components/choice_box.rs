use eframe::egui;

/// A caption followed by a drop-down of text choices
pub struct ChoiceBox<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub value: &'a mut String,
    pub choices: &'a [String],
}

impl<'a> ChoiceBox<'a> {
    pub fn new(id: &'a str, label: &'a str, value: &'a mut String, choices: &'a [String]) -> Self {
        Self {
            id,
            label,
            value,
            choices,
        }
    }

    /// Returns true when a different choice was picked
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        ui.label(self.label);
        egui::ComboBox::from_id_salt(self.id)
            .selected_text(self.value.as_str())
            .show_ui(ui, |ui| {
                for choice in self.choices {
                    let selected = *self.value == *choice;
                    if ui.selectable_label(selected, choice.as_str()).clicked() && !selected {
                        *self.value = choice.clone();
                        changed = true;
                    }
                }
            });
        changed
    }
}
