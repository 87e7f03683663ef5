//! Drawing elements and the render capability.
//!
//! This module provides the [`Render`] trait every drawing element implements
//! and the closed set of shape variants ([`Point`], [`Line`], [`Rectangle`])
//! gathered in the [`Element`] sum type.
//!
//! # Storing polymorphic elements
//!
//! A trait object has no size known at compile time, so a container cannot
//! hold one by value:
//!
//! ```compile_fail
//! use easel_core::element::{Point, Render};
//!
//! let elements: Vec<dyn Render> = vec![Point::new(10, 15)];
//! ```
//!
//! Either box each element so the container holds exclusive owners, or use
//! [`Element`], whose variants are stored inline:
//!
//! ```
//! use easel_core::element::{Element, Line, Point, Render};
//!
//! let boxed: Vec<Box<dyn Render>> = vec![Box::new(Point::new(10, 15))];
//! let inline: Vec<Element> = vec![Point::new(10, 15).into(), Line::new(0, 0, 5, 5).into()];
//!
//! assert_eq!(boxed[0].render(), inline[0].render());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod line;
mod point;
mod rectangle;

pub use line::Line;
pub use point::Point;
pub use rectangle::Rectangle;

/// A renderable drawing element.
///
/// Rendering is deterministic and reads only the element's own fields.
pub trait Render: fmt::Debug {
    /// Returns the one-line description of this element.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// The kinds of shape an [`Element`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Point,
    Line,
    Rectangle,
}

impl ElementKind {
    /// Returns a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A drawing element stored by value.
///
/// Deserializes from a table tagged with `kind`:
///
/// ```
/// use easel_core::element::{Element, Point};
///
/// let element: Element = toml::from_str("kind = \"point\"\nx = 10\ny = 15").unwrap();
/// assert_eq!(element, Element::Point(Point::new(10, 15)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    Point(Point),
    Line(Line),
    Rectangle(Rectangle),
}

impl Element {
    /// Returns which shape this element holds.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Point(_) => ElementKind::Point,
            Self::Line(_) => ElementKind::Line,
            Self::Rectangle(_) => ElementKind::Rectangle,
        }
    }
}

impl Render for Element {
    fn render(&self) -> String {
        match self {
            Self::Point(point) => point.render(),
            Self::Line(line) => line.render(),
            Self::Rectangle(rectangle) => rectangle.render(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Point> for Element {
    fn from(point: Point) -> Self {
        Self::Point(point)
    }
}

impl From<Line> for Element {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Rectangle> for Element {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl<T: Into<Element>> From<Box<T>> for Element {
    fn from(boxed: Box<T>) -> Self {
        (*boxed).into()
    }
}
