//! The drawing engine: a cursor that leaves a trail of strokes as it moves.
//!
//! Coordinates follow the usual turtle conventions: the origin sits at the
//! centre of the canvas, y grows upwards, heading `0` points east and positive
//! angles turn counter-clockwise. Headings are stored in degrees and converted
//! at the boundary according to the turtle's [`AngleMode`].

mod color;
mod shape;

pub use color::{color_from_channels, parse_color};
pub use shape::Shape;

use egui::{Color32, Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};

use crate::error::TurtleError;
use crate::stroke::{Fill, MutableStroke, StrokeRef};

/// Largest arc `circle` will draw, in degrees
pub const MAX_CIRCLE_EXTENT: f32 = 3600.0;

/// Unit used for angles passed to and returned from the turtle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

/// Settings applied to a freshly created (or reset) turtle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurtleDefaults {
    pub angle_mode: AngleMode,
    pub pen_down: bool,
    pub pen_color: String,
    pub fill_color: String,
    pub shape: String,
    pub pen_size: f32,
    pub speed: f32,
}

impl Default for TurtleDefaults {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            pen_down: false,
            pen_color: "Black".to_owned(),
            fill_color: "Gray".to_owned(),
            shape: "classic".to_owned(),
            pen_size: 1.0,
            speed: 10.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Turtle {
    position: Pos2,
    /// Degrees in `[0, 360)`
    heading: f32,
    angle_mode: AngleMode,
    pen_down: bool,
    pen_color: Color32,
    fill_color: Color32,
    pen_size: f32,
    shape: Shape,
    speed: u8,
    visible: bool,

    strokes: Vec<StrokeRef>,
    current_stroke: Option<MutableStroke>,
    fills: Vec<Fill>,
    fill_path: Option<Vec<Pos2>>,

    defaults: TurtleDefaults,
}

impl Turtle {
    /// Create a turtle at the origin with the given defaults applied
    pub fn new(defaults: TurtleDefaults) -> Result<Self, TurtleError> {
        let mut turtle = Self {
            position: Pos2::ZERO,
            heading: 0.0,
            angle_mode: AngleMode::Degrees,
            pen_down: false,
            pen_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            pen_size: 1.0,
            shape: Shape::Classic,
            speed: 10,
            visible: true,
            strokes: Vec::new(),
            current_stroke: None,
            fills: Vec::new(),
            fill_path: None,
            defaults,
        };
        turtle.apply_defaults()?;
        Ok(turtle)
    }

    fn apply_defaults(&mut self) -> Result<(), TurtleError> {
        let defaults = self.defaults.clone();
        self.angle_mode = defaults.angle_mode;
        self.pen_down = defaults.pen_down;
        self.pen_color = parse_color(&defaults.pen_color)?;
        self.fill_color = parse_color(&defaults.fill_color)?;
        self.shape = defaults.shape.parse()?;
        self.set_pen_size(defaults.pen_size)?;
        self.set_speed(defaults.speed);
        Ok(())
    }

    // Movement

    pub fn forward(&mut self, distance: f32) {
        let target = self.position + self.direction() * distance;
        self.move_to(target);
    }

    pub fn backward(&mut self, distance: f32) {
        self.forward(-distance);
    }

    pub fn left(&mut self, angle: f32) {
        self.rotate_degrees(self.to_degrees(angle));
    }

    pub fn right(&mut self, angle: f32) {
        self.rotate_degrees(-self.to_degrees(angle));
    }

    pub fn goto(&mut self, x: f32, y: f32) {
        self.move_to(pos2(x, y));
    }

    pub fn set_x(&mut self, x: f32) {
        self.move_to(pos2(x, self.position.y));
    }

    pub fn set_y(&mut self, y: f32) {
        self.move_to(pos2(self.position.x, y));
    }

    pub fn set_heading(&mut self, angle: f32) {
        self.heading = normalize_degrees(self.to_degrees(angle));
    }

    /// Move to the origin and face east
    pub fn home(&mut self) {
        self.move_to(Pos2::ZERO);
        self.heading = 0.0;
    }

    /// Draw an arc of the given radius, counter-clockwise when `radius` is positive.
    ///
    /// `extent` is in the current angle unit; `None` draws a full circle.
    /// The arc is approximated by a regular polygon whose step count grows
    /// with the radius. Extents beyond [`MAX_CIRCLE_EXTENT`] degrees are rejected.
    pub fn circle(&mut self, radius: f32, extent: Option<f32>) -> Result<(), TurtleError> {
        let requested = extent;
        let extent = extent.map_or(360.0, |e| self.to_degrees(e));
        if !extent.is_finite() || extent.abs() > MAX_CIRCLE_EXTENT {
            return Err(TurtleError::BadArgument {
                operation: "circle",
                expected: "an extent of at most ten full turns",
                got: requested.map_or_else(String::new, |e| e.to_string()),
            });
        }
        let fraction = extent.abs() / 360.0;
        let steps = 1 + ((11.0 + radius.abs() / 6.0).min(59.0) * fraction) as usize;

        let mut step_angle = extent / steps as f32;
        let mut half_step = 0.5 * step_angle;
        let mut chord = 2.0 * radius * half_step.to_radians().sin();
        if radius < 0.0 {
            chord = -chord;
            step_angle = -step_angle;
            half_step = -half_step;
        }

        self.rotate_degrees(half_step);
        for _ in 0..steps {
            self.forward(chord);
            self.rotate_degrees(step_angle);
        }
        self.rotate_degrees(-half_step);
        Ok(())
    }

    // Pen

    pub fn pen_up(&mut self) {
        self.commit_stroke();
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn set_pen_color(&mut self, color: Color32) {
        if color != self.pen_color {
            self.commit_stroke();
            self.pen_color = color;
        }
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    pub fn set_pen_size(&mut self, size: f32) -> Result<(), TurtleError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(TurtleError::BadPenSize(size));
        }
        if size != self.pen_size {
            self.commit_stroke();
            self.pen_size = size;
        }
        Ok(())
    }

    pub fn begin_fill(&mut self) {
        self.fill_path = Some(vec![self.position]);
    }

    /// Close the polygon traced since `begin_fill` and paint it with the fill color
    pub fn end_fill(&mut self) -> Result<(), TurtleError> {
        let path = self
            .fill_path
            .take()
            .ok_or(TurtleError::NotFilling("end_fill"))?;

        if path.len() > 2 {
            self.fills.push(Fill {
                points: path,
                color: self.fill_color,
            });
        }
        Ok(())
    }

    pub fn filling(&self) -> bool {
        self.fill_path.is_some()
    }

    // Appearance

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Set the animation speed.
    ///
    /// Values between 0.5 and 10 are rounded; anything else means "as fast as possible" (0).
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if (0.5..=10.0).contains(&speed) {
            speed.round() as u8
        } else {
            0
        };
    }

    // Queries

    pub fn position(&self) -> Pos2 {
        self.position
    }

    /// Heading in the current angle unit
    pub fn heading(&self) -> f32 {
        self.from_degrees(self.heading)
    }

    pub fn heading_degrees(&self) -> f32 {
        self.heading
    }

    pub fn is_down(&self) -> bool {
        self.pen_down
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn pen_color(&self) -> Color32 {
        self.pen_color
    }

    pub fn fill_color(&self) -> Color32 {
        self.fill_color
    }

    pub fn pen_size(&self) -> f32 {
        self.pen_size
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn distance(&self, x: f32, y: f32) -> f32 {
        self.position.distance(pos2(x, y))
    }

    /// Angle from the turtle's position to the point, in the current unit
    pub fn towards(&self, x: f32, y: f32) -> f32 {
        let delta = pos2(x, y) - self.position;
        let degrees = normalize_degrees(delta.y.atan2(delta.x).to_degrees());
        self.from_degrees(degrees)
    }

    /// The one-line readout shown in the status bar
    pub fn status(&self) -> String {
        let pen = if self.pen_down { "Down" } else { "Up" };
        format!(
            "[Pen {pen}] @({:.2},{:.2}):{}",
            self.position.x,
            self.position.y,
            self.heading()
        )
    }

    // Drawing

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> Option<&MutableStroke> {
        self.current_stroke.as_ref()
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Erase everything this turtle has drawn; position and attributes are kept
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current_stroke = None;
        self.fills.clear();
        if self.fill_path.is_some() {
            self.fill_path = Some(vec![self.position]);
        }
    }

    /// Erase the drawing, return home and restore the default attributes
    pub fn reset(&mut self) -> Result<(), TurtleError> {
        self.clear();
        self.fill_path = None;
        self.pen_up();
        self.home();
        self.visible = true;
        self.apply_defaults()
    }

    pub fn degrees(&mut self) {
        self.angle_mode = AngleMode::Degrees;
    }

    pub fn radians(&mut self) {
        self.angle_mode = AngleMode::Radians;
    }

    fn direction(&self) -> Vec2 {
        Vec2::angled(self.heading.to_radians())
    }

    fn rotate_degrees(&mut self, degrees: f32) {
        self.heading = normalize_degrees(self.heading + degrees);
    }

    fn move_to(&mut self, target: Pos2) {
        if self.pen_down {
            let (color, size, origin) = (self.pen_color, self.pen_size, self.position);
            self.current_stroke
                .get_or_insert_with(|| MutableStroke::new(color, size, origin))
                .add_point(target);
        }
        if let Some(path) = &mut self.fill_path {
            path.push(target);
        }
        self.position = target;
    }

    fn commit_stroke(&mut self) {
        if let Some(stroke) = self.current_stroke.take() {
            if stroke.is_drawable() {
                self.strokes.push(stroke.into_stroke_ref());
            }
        }
    }

    fn to_degrees(&self, angle: f32) -> f32 {
        match self.angle_mode {
            AngleMode::Degrees => angle,
            AngleMode::Radians => angle.to_degrees(),
        }
    }

    fn from_degrees(&self, degrees: f32) -> f32 {
        match self.angle_mode {
            AngleMode::Degrees => degrees,
            AngleMode::Radians => degrees.to_radians(),
        }
    }
}

fn normalize_degrees(degrees: f32) -> f32 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn turtle() -> Turtle {
        Turtle::new(TurtleDefaults::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let t = turtle();
        assert_eq!(t.position(), Pos2::ZERO);
        assert!(!t.is_down());
        assert!(t.is_visible());
        assert_eq!(t.pen_color(), Color32::BLACK);
        assert_eq!(t.fill_color(), parse_color("gray").unwrap());
        assert_eq!(t.shape(), Shape::Classic);
        assert_eq!(t.speed(), 10);
        assert_eq!(t.status(), "[Pen Up] @(0.00,0.00):0");
    }

    #[test]
    fn test_bad_defaults_are_rejected() {
        let defaults = TurtleDefaults {
            pen_color: "nosuch".to_owned(),
            ..TurtleDefaults::default()
        };
        assert!(Turtle::new(defaults).is_err());
    }

    #[test]
    fn test_forward_and_turns() {
        let mut t = turtle();
        t.forward(50.0);
        assert!(approx(t.position().x, 50.0) && approx(t.position().y, 0.0));

        t.left(90.0);
        t.forward(20.0);
        assert!(approx(t.position().x, 50.0) && approx(t.position().y, 20.0));
        assert!(approx(t.heading(), 90.0));

        t.right(180.0);
        assert!(approx(t.heading(), 270.0));

        t.backward(10.0);
        assert!(approx(t.position().y, 30.0));
    }

    #[test]
    fn test_pen_up_draws_nothing() {
        let mut t = turtle();
        t.forward(100.0);
        assert!(t.strokes().is_empty());
        assert!(t.current_stroke().is_none());
    }

    #[test]
    fn test_strokes_split_on_pen_changes() {
        let mut t = turtle();
        t.pen_down();
        t.forward(10.0);
        t.forward(10.0);
        assert_eq!(t.current_stroke().map(|s| s.points().len()), Some(3));

        t.set_pen_color(Color32::RED);
        t.forward(10.0);
        t.pen_up();

        assert_eq!(t.strokes().len(), 2);
        assert_eq!(t.strokes()[0].color(), Color32::BLACK);
        assert_eq!(t.strokes()[1].color(), Color32::RED);
        assert!(approx(t.strokes()[1].points()[0].x, 20.0));
    }

    #[test]
    fn test_full_circle_returns_to_start() {
        let mut t = turtle();
        t.pen_down();
        t.circle(50.0, None).unwrap();
        assert!((t.position().x).abs() < 1e-2);
        assert!((t.position().y).abs() < 1e-2);
        assert!(approx(t.heading(), 0.0) || approx(t.heading(), 360.0));
        // counter-clockwise: the arc goes up first
        let points = t.current_stroke().unwrap().points();
        assert!(points[1].y > 0.0);
    }

    #[test]
    fn test_half_circle_turns_around() {
        let mut t = turtle();
        t.circle(10.0, Some(180.0)).unwrap();
        assert!(approx(t.heading(), 180.0));
        assert!(t.position().x.abs() < 1e-2);
        assert!((t.position().y - 20.0).abs() < 1e-2);
    }

    #[test]
    fn test_circle_extent_is_bounded() {
        let mut t = turtle();
        t.pen_down();
        assert!(matches!(
            t.circle(10.0, Some(1e30)),
            Err(TurtleError::BadArgument { operation: "circle", .. })
        ));
        assert!(t.circle(60.0, Some(-36_000_000.0)).is_err());
        assert!(t.current_stroke().is_none());
        assert_eq!(t.position(), Pos2::ZERO);

        // ten full turns is the most one command can draw
        t.circle(60.0, Some(MAX_CIRCLE_EXTENT)).unwrap();
        let points = t.current_stroke().unwrap().points().len();
        assert!(points <= 600, "{points} points");
    }

    #[test]
    fn test_radians_mode() {
        let mut t = turtle();
        t.radians();
        t.left(std::f32::consts::FRAC_PI_2);
        assert!(approx(t.heading_degrees(), 90.0));
        assert!(approx(t.heading(), std::f32::consts::FRAC_PI_2));
        t.degrees();
        assert!(approx(t.heading(), 90.0));
    }

    #[test]
    fn test_fill_requires_begin() {
        let mut t = turtle();
        assert_eq!(t.end_fill(), Err(TurtleError::NotFilling("end_fill")));

        t.begin_fill();
        assert!(t.filling());
        t.forward(10.0);
        t.left(90.0);
        t.forward(10.0);
        t.end_fill().unwrap();
        assert!(!t.filling());
        assert_eq!(t.fills().len(), 1);
        assert_eq!(t.fills()[0].points.len(), 3);
    }

    #[test]
    fn test_speed_clamping() {
        let mut t = turtle();
        t.set_speed(3.4);
        assert_eq!(t.speed(), 3);
        t.set_speed(50.0);
        assert_eq!(t.speed(), 0);
        t.set_speed(0.2);
        assert_eq!(t.speed(), 0);
    }

    #[test]
    fn test_pen_size_must_be_positive() {
        let mut t = turtle();
        assert_eq!(t.set_pen_size(0.0), Err(TurtleError::BadPenSize(0.0)));
        assert!(t.set_pen_size(3.0).is_ok());
        assert_eq!(t.pen_size(), 3.0);
    }

    #[test]
    fn test_clear_keeps_position_and_reset_restores() {
        let mut t = turtle();
        t.pen_down();
        t.set_pen_color(Color32::RED);
        t.forward(40.0);
        t.hide();
        t.clear();
        assert!(t.strokes().is_empty() && t.current_stroke().is_none());
        assert!(approx(t.position().x, 40.0));

        t.reset().unwrap();
        assert_eq!(t.position(), Pos2::ZERO);
        assert_eq!(t.pen_color(), Color32::BLACK);
        assert!(!t.is_down());
        assert!(t.is_visible());
    }

    #[test]
    fn test_distance_and_towards() {
        let t = turtle();
        assert!(approx(t.distance(3.0, 4.0), 5.0));
        assert!(approx(t.towards(0.0, 10.0), 90.0));
        assert!(approx(t.towards(0.0, -10.0), 270.0));
    }
}
