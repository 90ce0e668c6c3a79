use std::mem;

use super::{UiEvent, toggle_operation};
use crate::session::Session;

/// Whether the event loop should keep going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Route a batch of events in order, refreshing the status readout before each one.
///
/// Stops at the first quit event; later events in the batch are dropped.
pub fn route_events(events: impl IntoIterator<Item = UiEvent>, session: &mut Session) -> Flow {
    for event in events {
        session.refresh_status();
        if route_event(&event, session) == Flow::Quit {
            return Flow::Quit;
        }
    }
    session.refresh_status();
    Flow::Continue
}

/// Routes a single event to the turtle, the interpreter or the session settings
pub fn route_event(event: &UiEvent, session: &mut Session) -> Flow {
    match event {
        UiEvent::Quit => {
            log::info!("Window closed, ending session");
            return Flow::Quit;
        }
        UiEvent::Run => submit_command(session),
        UiEvent::Move(code) => move_turtle(session, *code),
        UiEvent::Toggle(label) => {
            session.invoke(&toggle_operation(label), &[]);
        }
        UiEvent::WidgetChanged(name) => widget_changed(session, name),
        UiEvent::Action(label) => {
            session.invoke(&label.to_lowercase(), &[]);
        }
        UiEvent::NewTurtle => new_turtle(session),
        UiEvent::Ignored(key) => log::trace!("Ignoring event {key}"),
    }
    Flow::Continue
}

fn submit_command(session: &mut Session) {
    let line = mem::take(&mut session.widgets.cmdline);
    log::info!("Running command line: {line}");
    session.history.record(line.clone());
    session.interpret(&line);
}

fn move_turtle(session: &mut Session, code: char) {
    let settings = session.settings;
    let turtle = session.screen.active_turtle_mut();
    match code {
        'f' => turtle.forward(settings.distance),
        'b' => turtle.backward(settings.distance),
        'l' => turtle.left(settings.rotation),
        'r' => turtle.right(settings.rotation),
        other => log::debug!("Unknown movement code {other}"),
    }
}

fn widget_changed(session: &mut Session, name: &str) {
    match name {
        "distance" => session.settings.distance = session.widgets.distance as f32,
        "rotation" => session.settings.rotation = session.widgets.rotation as f32,
        "pencolor" | "fillcolor" | "pensize" | "speed" | "shape" => {
            if let Some(arg) = session.widgets.arg(name) {
                session.invoke(name, &[arg]);
            }
        }
        "canvasWidth" | "canvasHeight" => session.screen.resize_canvas(
            session.widgets.canvas_width as f32,
            session.widgets.canvas_height as f32,
        ),
        "turtle" => {
            let name = session.widgets.turtle.clone();
            if let Err(err) = session.screen.select_turtle(&name) {
                log::warn!("{err}");
                session.console.print(err.to_string());
                session.widgets.turtle = session.screen.active_name().to_owned();
            }
        }
        other => log::trace!("Ignoring widget {other}"),
    }
}

fn new_turtle(session: &mut Session) {
    let name = mem::take(&mut session.widgets.new_turtle);
    match session.screen.new_turtle(&name) {
        Ok(_) => {
            session.widgets.turtle = session.screen.active_name().to_owned();
            session.console.print(format!("Created turtle {}", session.widgets.turtle));
        }
        Err(err) => {
            log::warn!("{err}");
            session.console.print(err.to_string());
        }
    }
}
