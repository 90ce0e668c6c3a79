use egui::{Color32, Pos2};
use std::sync::Arc;

// Immutable line drawn by a turtle, in turtle coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Line still being drawn while the pen stays down
#[derive(Debug, Clone)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    pub fn new(color: Color32, thickness: f32, points: Vec<Pos2>) -> Self {
        Self {
            points,
            color,
            thickness,
        }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl MutableStroke {
    /// Start a stroke at `origin`
    pub fn new(color: Color32, thickness: f32, origin: Pos2) -> Self {
        Self {
            points: vec![origin],
            color,
            thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// A stroke with a single point has nothing to show
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }

    pub fn into_stroke_ref(self) -> StrokeRef {
        Arc::new(Stroke::new(self.color, self.thickness, self.points))
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

/// Closed polygon painted by `end_fill`
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub points: Vec<Pos2>,
    pub color: Color32,
}
