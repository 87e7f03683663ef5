use serde::{Deserialize, Serialize};

use super::Render;

/// A single point on the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Create a new point. Any coordinates are accepted.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Render for Point {
    fn render(&self) -> String {
        format!("Rendering a point ({}, {})", self.x, self.y)
    }
}
