use std::collections::HashMap;

use egui::{Vec2, vec2};
use thiserror::Error;

use crate::error::TurtleError;
use crate::turtle::{Turtle, TurtleDefaults};

/// Name of the turtle every screen starts with
pub const DEFAULT_TURTLE: &str = "default";

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no turtle named {0}")]
    UnknownTurtle(String),

    #[error("a turtle named {0} already exists")]
    DuplicateTurtle(String),

    #[error("turtle names can't be empty")]
    EmptyName,

    #[error(transparent)]
    Turtle(#[from] TurtleError),
}

/// The drawing surface: every turtle by name, which one is active, and the canvas size.
///
/// The active name always resolves to an entry in `turtles`; turtles are never removed.
#[derive(Debug)]
pub struct Screen {
    turtles: HashMap<String, Turtle>,
    active: String,
    canvas_size: Vec2,
    defaults: TurtleDefaults,
}

impl Screen {
    /// Create a screen holding a single active turtle named [`DEFAULT_TURTLE`]
    pub fn new(defaults: TurtleDefaults, canvas_size: Vec2) -> Result<Self, TurtleError> {
        let turtle = Turtle::new(defaults.clone())?;
        Ok(Self {
            turtles: HashMap::from([(DEFAULT_TURTLE.to_owned(), turtle)]),
            active: DEFAULT_TURTLE.to_owned(),
            canvas_size,
            defaults,
        })
    }

    /// Add a turtle with the screen's defaults and make it the active one
    pub fn new_turtle(&mut self, name: &str) -> Result<&mut Turtle, ScreenError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScreenError::EmptyName);
        }
        if self.turtles.contains_key(name) {
            return Err(ScreenError::DuplicateTurtle(name.to_owned()));
        }

        let turtle = Turtle::new(self.defaults.clone())?;
        log::info!("Created turtle {name}");
        self.turtles.insert(name.to_owned(), turtle);
        self.select_turtle(name)?;
        Ok(self.active_turtle_mut())
    }

    /// Make `name` the active turtle; unknown names leave the selection unchanged
    pub fn select_turtle(&mut self, name: &str) -> Result<(), ScreenError> {
        if !self.turtles.contains_key(name) {
            return Err(ScreenError::UnknownTurtle(name.to_owned()));
        }
        self.active = name.to_owned();
        Ok(())
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active_turtle(&self) -> &Turtle {
        &self.turtles[&self.active]
    }

    pub fn active_turtle_mut(&mut self) -> &mut Turtle {
        self.turtles
            .get_mut(&self.active)
            .expect("active turtle is always present")
    }

    pub fn turtle(&self, name: &str) -> Option<&Turtle> {
        self.turtles.get(name)
    }

    pub fn turtles(&self) -> impl Iterator<Item = (&str, &Turtle)> {
        self.turtles.iter().map(|(name, turtle)| (name.as_str(), turtle))
    }

    /// Turtle names in alphabetical order, for selectors
    pub fn turtle_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.turtles.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn resize_canvas(&mut self, width: f32, height: f32) {
        self.canvas_size = vec2(width, height);
        log::debug!("Canvas resized to {width}x{height}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Screen {
        Screen::new(TurtleDefaults::default(), vec2(640.0, 480.0)).unwrap()
    }

    #[test]
    fn test_starts_with_default_turtle() {
        let screen = screen();
        assert_eq!(screen.active_name(), DEFAULT_TURTLE);
        assert_eq!(screen.turtle_names(), vec![DEFAULT_TURTLE.to_owned()]);
    }

    #[test]
    fn test_new_turtle_becomes_active() {
        let mut screen = screen();
        screen.new_turtle("bob").unwrap().forward(10.0);
        assert_eq!(screen.active_name(), "bob");
        assert_eq!(screen.turtle(DEFAULT_TURTLE).unwrap().position().x, 0.0);
        assert!(matches!(
            screen.new_turtle("bob"),
            Err(ScreenError::DuplicateTurtle(_))
        ));
        assert!(matches!(screen.new_turtle("  "), Err(ScreenError::EmptyName)));
    }

    #[test]
    fn test_select_unknown_keeps_active() {
        let mut screen = screen();
        screen.new_turtle("bob").unwrap();
        assert!(screen.select_turtle("alice").is_err());
        assert_eq!(screen.active_name(), "bob");
        screen.select_turtle(DEFAULT_TURTLE).unwrap();
        assert_eq!(screen.active_name(), DEFAULT_TURTLE);
    }

    #[test]
    fn test_resize_canvas() {
        let mut screen = screen();
        screen.resize_canvas(800.0, 600.0);
        assert_eq!(screen.canvas_size(), vec2(800.0, 600.0));
    }
}
