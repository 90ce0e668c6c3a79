use std::fmt;
use std::str::FromStr;

use egui::Vec2;

use crate::error::TurtleError;

/// The outline drawn at a turtle's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    Arrow,
    Circle,
    #[default]
    Classic,
    Square,
    Triangle,
    Turtle,
}

impl Shape {
    pub const ALL: [Shape; 6] = [
        Shape::Arrow,
        Shape::Circle,
        Shape::Classic,
        Shape::Square,
        Shape::Triangle,
        Shape::Turtle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Arrow => "arrow",
            Shape::Circle => "circle",
            Shape::Classic => "classic",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Turtle => "turtle",
        }
    }

    /// Polygon vertices in shape space: the turtle points along +y, units are pixels.
    pub fn polygon(self) -> &'static [Vec2] {
        match self {
            Shape::Arrow => ARROW,
            Shape::Circle => CIRCLE,
            Shape::Classic => CLASSIC,
            Shape::Square => SQUARE,
            Shape::Triangle => TRIANGLE,
            Shape::Turtle => TURTLE,
        }
    }
}

impl FromStr for Shape {
    type Err = TurtleError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == name)
            .ok_or_else(|| TurtleError::UnknownShape(name.to_owned()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn v(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

const ARROW: &[Vec2] = &[v(-10.0, 0.0), v(10.0, 0.0), v(0.0, 10.0)];

const CLASSIC: &[Vec2] = &[v(0.0, 0.0), v(-5.0, -9.0), v(0.0, -7.0), v(5.0, -9.0)];

const SQUARE: &[Vec2] = &[v(10.0, -10.0), v(10.0, 10.0), v(-10.0, 10.0), v(-10.0, -10.0)];

const TRIANGLE: &[Vec2] = &[v(10.0, -5.77), v(0.0, 11.55), v(-10.0, -5.77)];

const CIRCLE: &[Vec2] = &[
    v(10.0, 0.0),
    v(9.51, 3.09),
    v(8.09, 5.88),
    v(5.88, 8.09),
    v(3.09, 9.51),
    v(0.0, 10.0),
    v(-3.09, 9.51),
    v(-5.88, 8.09),
    v(-8.09, 5.88),
    v(-9.51, 3.09),
    v(-10.0, 0.0),
    v(-9.51, -3.09),
    v(-8.09, -5.88),
    v(-5.88, -8.09),
    v(-3.09, -9.51),
    v(0.0, -10.0),
    v(3.09, -9.51),
    v(5.88, -8.09),
    v(8.09, -5.88),
    v(9.51, -3.09),
];

const TURTLE: &[Vec2] = &[
    v(0.0, 16.0),
    v(-2.0, 14.0),
    v(-1.0, 10.0),
    v(-4.0, 7.0),
    v(-7.0, 9.0),
    v(-9.0, 8.0),
    v(-6.0, 5.0),
    v(-7.0, 1.0),
    v(-5.0, -3.0),
    v(-8.0, -6.0),
    v(-6.0, -8.0),
    v(-4.0, -5.0),
    v(0.0, -7.0),
    v(4.0, -5.0),
    v(6.0, -8.0),
    v(8.0, -6.0),
    v(5.0, -3.0),
    v(7.0, 1.0),
    v(6.0, 5.0),
    v(9.0, 8.0),
    v(7.0, 9.0),
    v(4.0, 7.0),
    v(1.0, 10.0),
    v(2.0, 14.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_shapes() {
        for shape in Shape::ALL {
            assert_eq!(shape.name().parse::<Shape>().unwrap(), shape);
            assert!(shape.polygon().len() >= 3);
        }
    }

    #[test]
    fn test_shape_names_are_case_sensitive() {
        assert!("Turtle".parse::<Shape>().is_err());
        assert_eq!(
            "blob".parse::<Shape>(),
            Err(TurtleError::UnknownShape("blob".to_owned()))
        );
    }
}
