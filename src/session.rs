use egui::vec2;

use crate::command::{Arg, CommandHistory, Interpretation, Interpreter, OperationTable};
use crate::config::{LayoutConfig, WidgetDefaults};
use crate::console::Console;
use crate::error::TurtleError;
use crate::screen::Screen;
use crate::turtle::Turtle;

/// Values the movement buttons use, changed through the distance and rotation spinners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub distance: f32,
    pub rotation: f32,
}

/// Current value of every control widget, keyed by the widget's event name
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetValues {
    pub distance: u32,
    pub rotation: u32,
    pub speed: u32,
    pub pen_color: String,
    pub fill_color: String,
    pub pen_size: u32,
    pub shape: String,
    pub turtle: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub cmdline: String,
    pub new_turtle: String,
}

impl WidgetValues {
    pub fn from_defaults(defaults: &WidgetDefaults, turtle: &str) -> Self {
        Self {
            distance: defaults.distance,
            rotation: defaults.rotation,
            speed: defaults.speed,
            pen_color: defaults.pen_color.clone(),
            fill_color: defaults.fill_color.clone(),
            pen_size: defaults.pen_size,
            shape: defaults.shape.clone(),
            turtle: turtle.to_owned(),
            canvas_width: defaults.canvas_width,
            canvas_height: defaults.canvas_height,
            cmdline: String::new(),
            new_turtle: String::new(),
        }
    }

    /// The widget's value as an operation argument, for widgets that feed a turtle operation
    pub fn arg(&self, key: &str) -> Option<Arg> {
        match key {
            "pencolor" => Some(Arg::Text(self.pen_color.clone())),
            "fillcolor" => Some(Arg::Text(self.fill_color.clone())),
            "pensize" => Some(Arg::Int(self.pen_size.into())),
            "speed" => Some(Arg::Int(self.speed.into())),
            "shape" => Some(Arg::Text(self.shape.clone())),
            _ => None,
        }
    }
}

/// Everything one running window owns: the turtles, the control state and the transcript
#[derive(Debug)]
pub struct Session {
    pub screen: Screen,
    pub settings: SessionSettings,
    pub widgets: WidgetValues,
    pub history: CommandHistory,
    pub console: Console,
    interpreter: Interpreter<Turtle>,
    status: String,
}

impl Session {
    pub fn new(config: &LayoutConfig) -> Result<Self, TurtleError> {
        let widgets = &config.widgets;
        let screen = Screen::new(
            config.turtle.clone(),
            vec2(widgets.canvas_width as f32, widgets.canvas_height as f32),
        )?;
        let status = screen.active_turtle().status();

        Ok(Self {
            settings: SessionSettings {
                distance: widgets.distance as f32,
                rotation: widgets.rotation as f32,
            },
            widgets: WidgetValues::from_defaults(widgets, screen.active_name()),
            screen,
            history: CommandHistory::new(),
            console: Console::new(),
            interpreter: Interpreter::new(OperationTable::turtle()),
            status,
        })
    }

    /// Interpret a command line against the active turtle, echoing the transcript to the console
    pub fn interpret(&mut self, line: &str) -> Interpretation {
        let outcome = self
            .interpreter
            .run(line, self.screen.active_turtle_mut());
        self.console.extend(outcome.transcript.iter().cloned());
        outcome
    }

    /// Invoke one operation on the active turtle, reporting its value or failure to the console
    pub fn invoke(&mut self, name: &str, args: &[Arg]) {
        match self
            .interpreter
            .invoke(name, args, self.screen.active_turtle_mut())
        {
            Ok(Some(value)) => self.console.print(format!("{name}: {value}")),
            Ok(None) => {}
            Err(error) => {
                log::warn!("{error}");
                self.console.print(error.to_string());
            }
        }
    }

    /// Recompute the pen/position/heading readout from the active turtle
    pub fn refresh_status(&mut self) -> &str {
        self.status = self.screen.active_turtle().status();
        &self.status
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
