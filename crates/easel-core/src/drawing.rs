//! The drawing aggregate.
//!
//! A [`Drawing`] gathers the elements of one picture. It offers two ways of
//! holding them:
//!
//! - **Owned**: elements moved into the drawing with [`Drawing::add_owned`].
//!   They are released by [`Drawing::clear`] or when the drawing is dropped.
//! - **Referenced**: elements placed in the drawing's arena with
//!   [`Drawing::insert`] and observed through [`ElementId`] keys with
//!   [`Drawing::add_ref`]. The arena lives exactly as long as the drawing, so
//!   a reference slot can be empty but never dangling.
//!
//! # Example
//!
//! ```
//! use easel_core::{drawing::Drawing, element::{Line, Point, Rectangle}};
//!
//! let mut drawing = Drawing::new();
//! drawing.add_owned(Point::new(10, 15));
//! drawing.add_owned(Line::new(25, 25, 50, 100));
//! drawing.add_owned(Rectangle::new(50, 50, 100, 75));
//!
//! let shared = drawing.insert(Point::new(45, 55));
//! drawing.add_ref(shared).unwrap();
//! drawing.add_null_ref();
//!
//! let refs = drawing.render_all_refs();
//! assert_eq!(refs.elements().count(), 1);
//! assert_eq!(refs.null_count(), 1);
//!
//! assert_eq!(drawing.render_all().elements().count(), 3);
//! ```

use log::{debug, trace};

use crate::{
    DrawingError,
    arena::{ElementArena, ElementId},
    element::{Element, Line, Point, Rectangle, Render},
    render::RenderOutput,
    store::{OwnedStore, render_ref_slots},
};

/// A collection of drawing elements, owned or referenced.
#[derive(Debug, Default)]
pub struct Drawing {
    owned: OwnedStore<Element>,
    arena: ElementArena,
    refs: Vec<Option<ElementId>>,
}

impl Drawing {
    /// Creates an empty drawing.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Owned elements
    // -------------------------------------------------------------------------

    /// Moves `element` into the owned store.
    pub fn add_owned(&mut self, element: impl Into<Element>) {
        self.owned.add_owned(element.into());
    }

    /// Moves the element out of `slot` into the owned store, skipping an
    /// empty slot. Returns whether an element was added.
    pub fn add_owned_slot(&mut self, slot: Option<Element>) -> bool {
        self.owned.add_slot(slot)
    }

    /// Renders the owned elements in insertion order.
    pub fn render_all(&self) -> RenderOutput {
        self.owned.render_all()
    }

    /// Releases every owned element and returns how many were released.
    pub fn clear(&mut self) -> usize {
        self.owned.clear()
    }

    pub fn owned(&self) -> &OwnedStore<Element> {
        &self.owned
    }

    // -------------------------------------------------------------------------
    // Referenced elements
    // -------------------------------------------------------------------------

    /// Moves `element` into the drawing's arena and returns its key.
    ///
    /// The element is not rendered until a reference to it is added.
    pub fn insert(&mut self, element: impl Into<Element>) -> ElementId {
        let id = self.arena.insert(element);
        trace!(id:% = id; "Inserted shared element");
        id
    }

    /// Resolves `id` against the drawing's arena.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.arena.get(id)
    }

    /// Appends a reference to the arena element named by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawingError::ForeignElement`] if `id` was not minted by
    /// this drawing.
    pub fn add_ref(&mut self, id: ElementId) -> Result<(), DrawingError> {
        if !self.arena.contains(id) {
            return Err(DrawingError::ForeignElement(id));
        }
        self.refs.push(Some(id));
        Ok(())
    }

    /// Appends an empty reference slot.
    pub fn add_null_ref(&mut self) {
        self.refs.push(None);
    }

    /// Renders every reference slot in insertion order.
    ///
    /// Empty slots produce one
    /// [`RenderLine::Null`](crate::render::RenderLine::Null) each and
    /// traversal continues.
    pub fn render_all_refs(&self) -> RenderOutput {
        render_ref_slots(
            self.refs
                .iter()
                .map(|slot| slot.and_then(|id| self.arena.get(id))),
        )
    }

    /// Forgets every reference and returns how many slots were dropped.
    ///
    /// Arena elements are left in place and can be referenced again.
    pub fn clear_refs(&mut self) -> usize {
        let count = self.refs.len();
        self.refs.clear();
        debug!(count; "Cleared element references");
        count
    }

    /// Releases every arena element along with the reference slots, and
    /// returns how many elements were released.
    ///
    /// Ids handed out before the call no longer resolve and are rejected by
    /// [`Drawing::add_ref`].
    pub fn clear_shared(&mut self) -> usize {
        self.refs.clear();
        let count = self.arena.clear();
        debug!(count; "Released shared elements");
        count
    }

    /// Returns the number of reference slots, empty ones included.
    pub fn refs_len(&self) -> usize {
        self.refs.len()
    }

    /// Returns the number of elements held in the arena.
    pub fn shared_len(&self) -> usize {
        self.arena.len()
    }

    // -------------------------------------------------------------------------
    // Whole drawing
    // -------------------------------------------------------------------------

    /// Renders the reference slots followed by the owned elements.
    pub fn render(&self) -> RenderOutput {
        let mut output = self.render_all_refs();
        output.merge(self.render_all());
        output
    }

    /// Replaces the reference slots and the arena with a fixed set of shapes.
    pub fn populate_demo_refs(&mut self) {
        self.clear_shared();

        let ids = [
            self.insert(Point::new(45, 55)),
            self.insert(Line::new(88, 98, 456, 987)),
            self.insert(Rectangle::new(879, 654, 123, 321)),
        ];
        self.refs.extend(ids.into_iter().map(Some));
    }

    /// Replaces the owned elements with a fixed set of shapes.
    pub fn populate_demo_owned(&mut self) {
        self.clear();

        self.add_owned(Point::new(10, 15));
        self.add_owned(Point::new(35, 22));
        self.add_owned(Line::new(55, 122, 234, 556));
        self.add_owned(Rectangle::new(3, 194, 34, 200));
    }
}

impl Drop for Drawing {
    fn drop(&mut self) {
        debug!(
            owned = self.owned.len(),
            shared = self.arena.len();
            "Releasing drawing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        factory,
        render::{RenderLine, StoreSource},
    };

    #[test]
    fn test_drawing_end_to_end_owned() {
        let mut drawing = Drawing::new();
        drawing.add_owned(Point::new(10, 15));
        drawing.add_owned(Line::new(25, 25, 50, 100));
        drawing.add_owned(Rectangle::new(50, 50, 100, 75));

        let output = drawing.render_all();
        assert_eq!(
            output.elements().collect::<Vec<_>>(),
            vec![
                "Rendering a point (10, 15)",
                "Rendering a line from (25, 25) to (50, 100)",
                "Rendering a rectangle of dimension 100x75, from (50, 50)",
            ]
        );
    }

    #[test]
    fn test_fresh_drawing_renders_single_empty_notice() {
        let drawing = Drawing::new();
        let output = drawing.render_all();

        assert_eq!(output.elements().count(), 0);
        assert_eq!(
            output.lines(),
            &[RenderLine::Empty {
                source: StoreSource::Owned
            }]
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut drawing = Drawing::new();
        drawing.add_owned(factory::point_element(1, 1));
        drawing.add_owned(factory::point_element(2, 2));

        assert_eq!(drawing.clear(), 2);
        assert_eq!(drawing.clear(), 0);
        assert_eq!(drawing.render_all().empty_count(), 1);
    }

    #[test]
    fn test_add_owned_slot_skips_empty() {
        let mut drawing = Drawing::new();
        assert!(!drawing.add_owned_slot(None));
        assert!(drawing.add_owned_slot(Some(factory::point_element(5, 5))));
        assert_eq!(drawing.owned().len(), 1);
    }

    #[test]
    fn test_add_owned_accepts_factory_handles() {
        let mut drawing = Drawing::new();
        drawing.add_owned(factory::point(35, 22));
        drawing.add_owned(factory::rectangle(3, 194, 34, 200));

        assert_eq!(drawing.render_all().elements().count(), 2);
    }

    #[test]
    fn test_refs_render_in_order_with_null_notice() {
        let mut drawing = Drawing::new();
        let point = drawing.insert(Point::new(45, 55));
        let line = drawing.insert(Line::new(88, 98, 456, 987));

        drawing.add_ref(line).expect("id from this drawing");
        drawing.add_null_ref();
        drawing.add_ref(point).expect("id from this drawing");

        let output = drawing.render_all_refs();
        assert_eq!(
            output.lines(),
            &[
                RenderLine::Header {
                    count: 3,
                    source: StoreSource::Borrowed
                },
                RenderLine::Element("Rendering a line from (88, 98) to (456, 987)".to_string()),
                RenderLine::Null,
                RenderLine::Element("Rendering a point (45, 55)".to_string()),
            ]
        );
    }

    #[test]
    fn test_add_ref_rejects_foreign_id() {
        let mut other = Drawing::new();
        let foreign = other.insert(Point::new(1, 1));

        let mut drawing = Drawing::new();
        drawing.insert(Point::new(2, 2));

        assert_eq!(
            drawing.add_ref(foreign),
            Err(DrawingError::ForeignElement(foreign))
        );
        assert_eq!(drawing.refs_len(), 0);
    }

    #[test]
    fn test_same_element_referenced_twice() {
        let mut drawing = Drawing::new();
        let id = drawing.insert(Point::new(7, 8));
        drawing.add_ref(id).expect("id from this drawing");
        drawing.add_ref(id).expect("id from this drawing");

        let output = drawing.render_all_refs();
        assert_eq!(
            output.elements().collect::<Vec<_>>(),
            vec!["Rendering a point (7, 8)", "Rendering a point (7, 8)"]
        );
    }

    #[test]
    fn test_clear_refs_keeps_arena() {
        let mut drawing = Drawing::new();
        let id = drawing.insert(Point::new(1, 2));
        drawing.add_ref(id).expect("id from this drawing");

        assert_eq!(drawing.clear_refs(), 1);
        assert_eq!(drawing.render_all_refs().empty_count(), 1);

        // The element is still owned by the drawing and can be referenced again.
        assert_eq!(drawing.shared_len(), 1);
        assert_eq!(drawing.get(id), Some(&factory::point_element(1, 2)));
        drawing.add_ref(id).expect("id still valid after clear_refs");
        assert_eq!(drawing.render_all_refs().elements().count(), 1);
    }

    #[test]
    fn test_clear_shared_releases_arena() {
        let mut drawing = Drawing::new();
        let id = drawing.insert(Point::new(1, 2));
        drawing.add_ref(id).expect("id from this drawing");
        drawing.add_owned(Point::new(3, 4));

        assert_eq!(drawing.clear_shared(), 1);
        assert_eq!(drawing.shared_len(), 0);
        assert_eq!(drawing.refs_len(), 0);
        assert_eq!(drawing.owned().len(), 1);

        assert_eq!(drawing.get(id), None);
        assert_eq!(drawing.add_ref(id), Err(DrawingError::ForeignElement(id)));
    }

    #[test]
    fn test_populate_demo_refs_does_not_accumulate() {
        let mut drawing = Drawing::new();
        for _ in 0..5 {
            drawing.populate_demo_refs();
        }

        assert_eq!(drawing.shared_len(), 3);
        assert_eq!(drawing.refs_len(), 3);
        assert_eq!(drawing.render_all_refs().elements().count(), 3);
    }

    #[test]
    fn test_owned_and_refs_are_independent() {
        let mut drawing = Drawing::new();
        drawing.add_owned(Point::new(1, 1));
        drawing.add_null_ref();

        drawing.clear();
        assert_eq!(drawing.refs_len(), 1);

        drawing.add_owned(Point::new(2, 2));
        drawing.clear_refs();
        assert_eq!(drawing.owned().len(), 1);
    }

    #[test]
    fn test_render_refs_then_owned() {
        let mut drawing = Drawing::new();
        drawing.populate_demo_refs();
        drawing.populate_demo_owned();

        let output = drawing.render();
        let rendered: Vec<&str> = output.elements().collect();

        assert_eq!(
            rendered,
            vec![
                "Rendering a point (45, 55)",
                "Rendering a line from (88, 98) to (456, 987)",
                "Rendering a rectangle of dimension 123x321, from (879, 654)",
                "Rendering a point (10, 15)",
                "Rendering a point (35, 22)",
                "Rendering a line from (55, 122) to (234, 556)",
                "Rendering a rectangle of dimension 34x200, from (3, 194)",
            ]
        );
    }

    #[test]
    fn test_populate_demo_owned_replaces_previous_elements() {
        let mut drawing = Drawing::new();
        drawing.add_owned(Point::new(0, 0));

        drawing.populate_demo_owned();
        drawing.populate_demo_owned();

        assert_eq!(drawing.owned().len(), 4);
    }

    #[test]
    fn test_populate_demo_refs_replaces_previous_slots() {
        let mut drawing = Drawing::new();
        drawing.add_null_ref();

        drawing.populate_demo_refs();

        let output = drawing.render_all_refs();
        assert_eq!(output.null_count(), 0);
        assert_eq!(output.elements().count(), 3);
    }
}
