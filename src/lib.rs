#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod screen;
pub mod session;
pub mod stroke;
pub mod turtle;

pub use app::TurtleApp;
pub use command::{Arg, CommandHistory, InterpretError, Interpretation, Interpreter, OperationTable};
pub use config::LayoutConfig;
pub use error::TurtleError;
pub use input::{Flow, UiEvent};
pub use renderer::Renderer;
pub use screen::Screen;
pub use session::Session;
pub use turtle::Turtle;
