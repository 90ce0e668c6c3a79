use eframe::egui;

use super::{event_button, widget_event};
use crate::components::{ChoiceBox, SpinBox};
use crate::config::{DISTANCE_RANGE, PEN_SIZE_RANGE, ROTATION_RANGE, SPEED_RANGE, WidgetDefaults};
use crate::input::UiEvent;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlTab {
    #[default]
    Movement,
    Pen,
    Turtle,
}

impl ControlTab {
    const ALL: [ControlTab; 3] = [ControlTab::Movement, ControlTab::Pen, ControlTab::Turtle];

    fn title(self) -> &'static str {
        match self {
            ControlTab::Movement => "Movement",
            ControlTab::Pen => "Pen",
            ControlTab::Turtle => "Turtle",
        }
    }
}

/// Tab strip with the movement, pen and turtle controls
pub fn controls_panel(
    ui: &mut egui::Ui,
    tab: &mut ControlTab,
    session: &mut Session,
    choices: &WidgetDefaults,
    events: &mut Vec<UiEvent>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for candidate in ControlTab::ALL {
                    ui.selectable_value(tab, candidate, candidate.title());
                }
            });
            ui.separator();

            match tab {
                ControlTab::Movement => movement_tab(ui, session, events),
                ControlTab::Pen => pen_tab(ui, session, choices, events),
                ControlTab::Turtle => turtle_tab(ui, session, choices, events),
            }
        });
    });
}

fn movement_tab(ui: &mut egui::Ui, session: &mut Session, events: &mut Vec<UiEvent>) {
    ui.horizontal(|ui| {
        for label in ["Left", "Forward", "Right", "Back"] {
            event_button(ui, label, events);
        }
    });

    let widgets = &mut session.widgets;
    ui.horizontal(|ui| {
        let distance = SpinBox::new("Distance:", &mut widgets.distance, DISTANCE_RANGE).show(ui);
        widget_event(distance.changed(), "distance", events);

        let rotation = SpinBox::new("Rotation:", &mut widgets.rotation, ROTATION_RANGE).show(ui);
        widget_event(rotation.changed(), "rotation", events);

        let speed = SpinBox::new("Speed:", &mut widgets.speed, SPEED_RANGE).show(ui);
        widget_event(speed.changed(), "speed", events);
    });
}

fn pen_tab(
    ui: &mut egui::Ui,
    session: &mut Session,
    choices: &WidgetDefaults,
    events: &mut Vec<UiEvent>,
) {
    let widgets = &mut session.widgets;
    ui.horizontal(|ui| {
        event_button(ui, "Pen Up", events);
        event_button(ui, "Pen Down", events);

        let pen = ChoiceBox::new("_pencolor_", "Color:", &mut widgets.pen_color, &choices.colors)
            .show(ui);
        widget_event(pen, "pencolor", events);

        let fill = ChoiceBox::new("_fillcolor_", "Fill:", &mut widgets.fill_color, &choices.colors)
            .show(ui);
        widget_event(fill, "fillcolor", events);

        let size = SpinBox::new("Size:", &mut widgets.pen_size, PEN_SIZE_RANGE).show(ui);
        widget_event(size.changed(), "pensize", events);
    });
}

fn turtle_tab(
    ui: &mut egui::Ui,
    session: &mut Session,
    choices: &WidgetDefaults,
    events: &mut Vec<UiEvent>,
) {
    let names = session.screen.turtle_names();
    let widgets = &mut session.widgets;

    ui.horizontal(|ui| {
        event_button(ui, "Hide", events);
        event_button(ui, "Show", events);

        let shape = ChoiceBox::new("_shape_", "Shape:", &mut widgets.shape, &choices.shapes)
            .show(ui);
        widget_event(shape, "shape", events);

        let turtle = ChoiceBox::new("_turtle_", "Turtle:", &mut widgets.turtle, &names).show(ui);
        widget_event(turtle, "turtle", events);
    });

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut widgets.new_turtle)
                .id_salt("_newturtle_")
                .hint_text("name")
                .desired_width(120.0),
        );
        event_button(ui, "New Turtle", events);
    });
}
