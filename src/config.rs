//! Window layout and widget defaults.
//!
//! Every struct is `#[serde(default)]`, so a config file only needs to name the
//! settings it wants to change. Example:
//!
//! ```json
//! {
//!     "title": "My turtle",
//!     "rows": ["canvas", "cmdline", "console", "status"],
//!     "widgets": { "distance": 25 }
//! }
//! ```

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::turtle::TurtleDefaults;

pub const DISTANCE_RANGE: RangeInclusive<u32> = 1..=1000;
pub const ROTATION_RANGE: RangeInclusive<u32> = 1..=90;
pub const SPEED_RANGE: RangeInclusive<u32> = 1..=100;
pub const PEN_SIZE_RANGE: RangeInclusive<u32> = 1..=10;
pub const CANVAS_WIDTH_RANGE: RangeInclusive<u32> = 640..=1359;
pub const CANVAS_HEIGHT_RANGE: RangeInclusive<u32> = 480..=1023;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A row of the main window, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Banner,
    Toolbar,
    Header,
    Canvas,
    Footer,
    Controls,
    Cmdline,
    Console,
    Status,
}

impl Row {
    pub const ALL: [Row; 9] = [
        Row::Banner,
        Row::Toolbar,
        Row::Header,
        Row::Canvas,
        Row::Footer,
        Row::Controls,
        Row::Cmdline,
        Row::Console,
        Row::Status,
    ];
}

/// Initial values and choices for the control widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    pub distance: u32,
    pub rotation: u32,
    pub speed: u32,
    pub pen_color: String,
    pub fill_color: String,
    pub pen_size: u32,
    pub shape: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub colors: Vec<String>,
    pub shapes: Vec<String>,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            distance: 10,
            rotation: 45,
            speed: 10,
            pen_color: "Black".to_owned(),
            fill_color: "Gray".to_owned(),
            pen_size: 1,
            shape: "classic".to_owned(),
            canvas_width: 640,
            canvas_height: 480,
            colors: [
                "Black", "Blue", "Red", "Green", "Pink", "Yellow", "Purple", "Orange", "Brown",
                "Gray", "White",
            ]
            .map(str::to_owned)
            .to_vec(),
            shapes: ["arrow", "circle", "classic", "square", "triangle", "turtle"]
                .map(str::to_owned)
                .to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub title: String,
    pub banner: String,
    pub header: String,
    pub footer: String,
    pub rows: Vec<Row>,
    pub widgets: WidgetDefaults,
    pub turtle: TurtleDefaults,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title: "Turtle SimpleGUI".to_owned(),
            banner: "Turtle SimpleGUI Demonstration".to_owned(),
            header: "Turtle screen".to_owned(),
            footer: String::new(),
            rows: Row::ALL.to_vec(),
            widgets: WidgetDefaults::default(),
            turtle: TurtleDefaults::default(),
        }
    }
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp the numeric widget defaults into the ranges their widgets allow
    pub fn sanitized(mut self) -> Self {
        let w = &mut self.widgets;
        w.distance = clamp(w.distance, &DISTANCE_RANGE);
        w.rotation = clamp(w.rotation, &ROTATION_RANGE);
        w.speed = clamp(w.speed, &SPEED_RANGE);
        w.pen_size = clamp(w.pen_size, &PEN_SIZE_RANGE);
        w.canvas_width = clamp(w.canvas_width, &CANVAS_WIDTH_RANGE);
        w.canvas_height = clamp(w.canvas_height, &CANVAS_HEIGHT_RANGE);
        self
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = LayoutConfig::from_json(r#"{ "title": "Mine", "widgets": { "distance": 25 } }"#)
            .unwrap();
        assert_eq!(config.title, "Mine");
        assert_eq!(config.widgets.distance, 25);
        assert_eq!(config.widgets.rotation, 45);
        assert_eq!(config.rows, Row::ALL.to_vec());
        assert_eq!(config.turtle, TurtleDefaults::default());
    }

    #[test]
    fn test_rows_are_reordered() {
        let config = LayoutConfig::from_json(r#"{ "rows": ["status", "canvas"] }"#).unwrap();
        assert_eq!(config.rows, vec![Row::Status, Row::Canvas]);
        assert!(!config.rows.contains(&Row::Banner));
    }

    #[test]
    fn test_unknown_row_is_an_error() {
        let err = LayoutConfig::from_json(r#"{ "rows": ["menubar"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_defaults_are_clamped() {
        let config =
            LayoutConfig::from_json(r#"{ "widgets": { "rotation": 400, "canvas_width": 10 } }"#)
                .unwrap();
        assert_eq!(config.widgets.rotation, 90);
        assert_eq!(config.widgets.canvas_width, 640);
    }

    #[test]
    fn test_missing_file() {
        let err = LayoutConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_turtle_defaults_from_json() {
        let config = LayoutConfig::from_json(
            r#"{ "turtle": { "angle_mode": "radians", "pen_down": true } }"#,
        )
        .unwrap();
        assert!(config.turtle.pen_down);
        assert_eq!(config.turtle.angle_mode, crate::turtle::AngleMode::Radians);
        assert_eq!(config.turtle.pen_color, "Black");
    }
}
