// src/renderer.rs
use eframe::egui::{self, Color32, Pos2, Rect, Shape as PaintShape, Stroke as PaintStroke, Vec2};

use crate::screen::Screen;
use crate::stroke::Fill;
use crate::turtle::Turtle;

/// Paints a [`Screen`] into a rectangle of the UI
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
    outline_width: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
            outline_width: 1.0,
        }
    }

    /// Renders every turtle's drawing, then the visible turtles on top
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle; turtle coordinates are centred in it
    ///     screen (Screen): The turtles to draw
    pub fn render(&self, painter: &egui::Painter, rect: Rect, screen: &Screen) {
        painter.rect_filled(rect, 0.0, self.background);
        let painter = painter.with_clip_rect(rect);
        let origin = rect.center();

        for (_, turtle) in screen.turtles() {
            self.render_drawing(&painter, origin, turtle);
        }
        for (_, turtle) in screen.turtles().filter(|(_, t)| t.is_visible()) {
            self.render_turtle(&painter, origin, turtle);
        }
    }

    fn render_drawing(&self, painter: &egui::Painter, origin: Pos2, turtle: &Turtle) {
        for Fill { points, color } in turtle.fills() {
            let points: Vec<Pos2> = points.iter().map(|&p| to_screen(origin, p)).collect();
            fill_polygon(painter, &points, *color);
        }

        for stroke in turtle.strokes() {
            draw_line(painter, origin, stroke.points(), stroke.color(), stroke.thickness());
        }

        if let Some(stroke) = turtle.current_stroke() {
            draw_line(painter, origin, stroke.points(), stroke.color(), stroke.thickness());
        }
    }

    fn render_turtle(&self, painter: &egui::Painter, origin: Pos2, turtle: &Turtle) {
        let outline = turtle_outline(turtle, origin);
        fill_polygon(painter, &outline, turtle.fill_color());
        painter.add(PaintShape::closed_line(
            outline,
            PaintStroke::new(self.outline_width, turtle.pen_color()),
        ));
    }
}

/// Map a point from turtle coordinates (origin centred, y up) to screen coordinates
pub fn to_screen(origin: Pos2, point: Pos2) -> Pos2 {
    Pos2::new(origin.x + point.x, origin.y - point.y)
}

/// The turtle's shape polygon placed at its position and rotated to its heading, in screen space
pub fn turtle_outline(turtle: &Turtle, origin: Pos2) -> Vec<Pos2> {
    // shapes point along +y, i.e. a heading of 90 degrees
    let angle = (turtle.heading_degrees() - 90.0).to_radians();
    let (sin, cos) = angle.sin_cos();
    let position = turtle.position();

    turtle
        .shape()
        .polygon()
        .iter()
        .map(|&Vec2 { x, y }| {
            let rotated = Pos2::new(
                position.x + x * cos - y * sin,
                position.y + x * sin + y * cos,
            );
            to_screen(origin, rotated)
        })
        .collect()
}

fn draw_line(painter: &egui::Painter, origin: Pos2, points: &[Pos2], color: Color32, width: f32) {
    if points.len() < 2 {
        return;
    }
    let points: Vec<Pos2> = points.iter().map(|&p| to_screen(origin, p)).collect();
    painter.add(PaintShape::line(points, PaintStroke::new(width, color)));
}

// Triangle fan around the centroid; good enough for the star-shaped outlines turtles draw
fn fill_polygon(painter: &egui::Painter, points: &[Pos2], color: Color32) {
    if points.len() < 3 {
        return;
    }

    let sum = points.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    let centroid = (sum / points.len() as f32).to_pos2();

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(centroid, color);
    for &point in points {
        mesh.colored_vertex(point, color);
    }

    let count = points.len() as u32;
    for i in 1..=count {
        let next = if i == count { 1 } else { i + 1 };
        mesh.add_triangle(0, i, next);
    }
    painter.add(PaintShape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::TurtleDefaults;
    use eframe::egui::{pos2, vec2};

    fn screen() -> Screen {
        Screen::new(TurtleDefaults::default(), vec2(640.0, 480.0)).unwrap()
    }

    #[test]
    fn test_to_screen_flips_y() {
        let origin = pos2(320.0, 240.0);
        assert_eq!(to_screen(origin, pos2(10.0, 20.0)), pos2(330.0, 220.0));
    }

    #[test]
    fn test_outline_follows_heading() {
        let mut screen = screen();
        let turtle = screen.active_turtle_mut();
        turtle.set_shape("arrow".parse().unwrap());

        // facing east, the arrow tip (0, 10) in shape space lands at x = +10
        let outline = turtle_outline(turtle, Pos2::ZERO);
        assert!((outline[2].x - 10.0).abs() < 1e-4);
        assert!(outline[2].y.abs() < 1e-4);

        turtle.left(90.0);
        let outline = turtle_outline(turtle, Pos2::ZERO);
        assert!(outline[2].x.abs() < 1e-4);
        assert!((outline[2].y + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_render_basics() {
        let mut screen = screen();
        let turtle = screen.active_turtle_mut();
        turtle.pen_down();
        turtle.begin_fill();
        turtle.circle(20.0, None).unwrap();
        turtle.end_fill().unwrap();

        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 480.0));
        let painter = egui::Painter::new(ctx.clone(), layer_id, rect);

        renderer.render(&painter, rect, &screen);
    }
}
