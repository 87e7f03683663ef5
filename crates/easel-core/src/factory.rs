//! Factory helpers producing owned elements.
//!
//! Each constructor hands back a freshly allocated element whose ownership
//! moves to the caller. Nothing else retains a reference to it, so the
//! handle can be forwarded across function boundaries and finally moved into
//! a store.
//!
//! ```
//! use easel_core::{factory, store::OwnedStore, element::Render};
//!
//! let mut store: OwnedStore<Box<dyn Render>> = OwnedStore::new();
//! store.add_owned(factory::boxed(factory::point(35, 22)));
//! store.add_owned(factory::boxed(factory::line(55, 122, 234, 556)));
//!
//! assert_eq!(store.render_all().elements().count(), 2);
//! ```
//!
//! A moved handle cannot be used again from the caller side:
//!
//! ```compile_fail
//! use easel_core::{factory, store::OwnedStore, element::Point};
//!
//! let mut store: OwnedStore<Box<Point>> = OwnedStore::new();
//! let point = factory::point(10, 15);
//! store.add_owned(point);
//! let _ = point.x();
//! ```

use crate::element::{Element, Line, Point, Rectangle, Render};

/// Allocate a [`Point`] and return its owning handle.
pub fn point(x: i32, y: i32) -> Box<Point> {
    Box::new(Point::new(x, y))
}

/// Allocate a [`Line`] and return its owning handle.
pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Box<Line> {
    Box::new(Line::new(x1, y1, x2, y2))
}

/// Allocate a [`Rectangle`] and return its owning handle.
pub fn rectangle(x: i32, y: i32, w: i32, h: i32) -> Box<Rectangle> {
    Box::new(Rectangle::new(x, y, w, h))
}

/// Erase the concrete shape of an owning handle.
pub fn boxed<T: Render + 'static>(element: Box<T>) -> Box<dyn Render> {
    element
}

/// Build a point [`Element`] by value.
pub fn point_element(x: i32, y: i32) -> Element {
    Point::new(x, y).into()
}

/// Build a line [`Element`] by value.
pub fn line_element(x1: i32, y1: i32, x2: i32, y2: i32) -> Element {
    Line::new(x1, y1, x2, y2).into()
}

/// Build a rectangle [`Element`] by value.
pub fn rectangle_element(x: i32, y: i32, w: i32, h: i32) -> Element {
    Rectangle::new(x, y, w, h).into()
}
