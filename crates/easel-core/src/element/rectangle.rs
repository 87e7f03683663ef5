use serde::{Deserialize, Serialize};

use super::Render;

/// An axis-aligned rectangle anchored at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rectangle {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

impl Rectangle {
    /// Create a new rectangle with origin `(x, y)`, width `w` and height `h`.
    ///
    /// Width and height are not validated; zero or negative sizes render as given.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the origin as `(x, y)`.
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> i32 {
        self.w
    }

    pub fn height(&self) -> i32 {
        self.h
    }
}

impl Render for Rectangle {
    fn render(&self) -> String {
        format!(
            "Rendering a rectangle of dimension {}x{}, from ({}, {})",
            self.w, self.h, self.x, self.y
        )
    }
}
