use serde::{Deserialize, Serialize};

use super::Render;

/// A straight line between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Line {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Line {
    /// Create a new line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// Degenerate lines, where both endpoints coincide, are allowed.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the starting endpoint as `(x, y)`.
    pub fn start(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// Returns the ending endpoint as `(x, y)`.
    pub fn end(&self) -> (i32, i32) {
        (self.x2, self.y2)
    }
}

impl Render for Line {
    fn render(&self) -> String {
        format!(
            "Rendering a line from ({}, {}) to ({}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_render() {
        assert_eq!(
            Line::new(25, 25, 50, 100).render(),
            "Rendering a line from (25, 25) to (50, 100)"
        );
    }

    #[test]
    fn test_line_endpoints() {
        let line = Line::new(88, 98, 456, 987);
        assert_eq!(line.start(), (88, 98));
        assert_eq!(line.end(), (456, 987));
    }

    #[test]
    fn test_degenerate_line() {
        let line = Line::new(4, 4, 4, 4);
        assert_eq!(line.start(), line.end());
        assert_eq!(line.render(), "Rendering a line from (4, 4) to (4, 4)");
    }
}
