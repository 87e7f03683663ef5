//! Built-in demonstration run when no scene file is given.
//!
//! Walks through the three ways of holding drawing elements:
//!
//! 1. Elements rendered directly from local variables.
//! 2. The same elements observed by reference through a [`BorrowedStore`].
//!    A second batch is created inside another function; it lives in a
//!    [`Bump`] arena declared before the store, so it outlives the store.
//! 3. Elements moved into a [`Drawing`] and released when it is cleared.

use bumpalo::Bump;
use log::{debug, info};

use easel::{
    drawing::Drawing,
    element::{Line, Point, Rectangle, Render},
    render::{RenderLine, RenderOutput},
    store::BorrowedStore,
};

/// Run the demonstration and collect everything it renders.
pub fn run() -> RenderOutput {
    info!("Running built-in demo");

    // Declared first so it is dropped after every store borrowing from it.
    let arena = Bump::new();

    let mut output = RenderOutput::new();

    let point = Point::new(11, 12);
    let line = Line::new(22, 23, 124, 125);
    let rect = Rectangle::new(33, 34, 234, 75);

    output.extend(
        [&point as &dyn Render, &line, &rect]
            .into_iter()
            .map(|element| RenderLine::Element(element.render())),
    );

    let mut refs: BorrowedStore<'_, dyn Render> = BorrowedStore::new();
    refs.add_ref(&point);
    refs.add_ref(&line);
    refs.add_ref(&rect);
    output.merge(refs.render_all_refs());

    refs.clear_refs();
    draw_from_other_scope(&arena, &mut refs);
    output.merge(refs.render_all_refs());
    debug!(arena_bytes = arena.allocated_bytes(); "Arena elements rendered");

    let mut drawing = Drawing::new();
    drawing.populate_demo_owned();
    output.merge(drawing.render_all());

    let count = drawing.clear();
    output.push(RenderLine::Released { count });

    output
}

/// Creates elements in `arena` and adds references to them, plus one empty
/// slot.
///
/// `Bump` never runs destructors; the shapes own no resources.
fn draw_from_other_scope<'a>(arena: &'a Bump, refs: &mut BorrowedStore<'a, dyn Render>) {
    refs.add_ref(arena.alloc(Point::new(45, 55)));
    refs.add_ref(arena.alloc(Line::new(88, 98, 456, 987)));
    refs.add_null();
    refs.add_ref(arena.alloc(Rectangle::new(879, 654, 123, 321)));
}
