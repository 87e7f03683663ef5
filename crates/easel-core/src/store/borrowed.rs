//! Provides `BorrowedStore`, a collection of non-owning element references.

use log::{debug, warn};

use crate::{
    element::Render,
    render::{RenderLine, RenderOutput, StoreSource},
};

/// A collection of references to elements owned elsewhere.
///
/// The store never releases its referents; clearing it only forgets the
/// references. A slot may be empty, in which case rendering reports it and
/// moves on to the next slot.
///
/// Every referent must outlive the store. This is checked at compile time,
/// so a reference to an element that has already been dropped is rejected:
///
/// ```compile_fail
/// use easel_core::{element::Point, store::BorrowedStore};
///
/// let mut store = BorrowedStore::new();
/// {
///     let point = Point::new(45, 55);
///     store.add_ref(&point);
/// }
/// store.render_all_refs();
/// ```
///
/// Referents declared in an enclosing scope are fine:
///
/// ```
/// use easel_core::{element::{Element, Point, Render}, store::BorrowedStore};
///
/// let point = Point::new(11, 12);
/// let element = Element::from(Point::new(1, 2));
///
/// let mut store: BorrowedStore<'_, dyn Render> = BorrowedStore::new();
/// store.add_ref(&point);
/// store.add_null();
/// store.add_ref(&element);
///
/// let output = store.render_all_refs();
/// assert_eq!(output.elements().count(), 2);
/// assert_eq!(output.null_count(), 1);
/// ```
#[derive(Debug)]
pub struct BorrowedStore<'a, T: Render + ?Sized> {
    slots: Vec<Option<&'a T>>,
}

impl<'a, T: Render + ?Sized> BorrowedStore<'a, T> {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Appends a reference to `element`. Ownership stays with the caller.
    pub fn add_ref(&mut self, element: &'a T) {
        self.slots.push(Some(element));
    }

    /// Appends an empty slot.
    pub fn add_null(&mut self) {
        self.slots.push(None);
    }

    /// Appends `slot` as-is, empty or not.
    pub fn add_slot(&mut self, slot: Option<&'a T>) {
        self.slots.push(slot);
    }

    /// Renders every slot in insertion order.
    ///
    /// An empty slot produces one [`RenderLine::Null`] and traversal
    /// continues. A store without slots emits a single [`RenderLine::Empty`].
    pub fn render_all_refs(&self) -> RenderOutput {
        render_ref_slots(self.slots.iter().copied())
    }

    /// Forgets every reference. The referents are left untouched.
    pub fn clear_refs(&mut self) {
        debug!(count = self.slots.len(); "Cleared borrowed references");
        self.slots.clear();
    }

    /// Returns the number of slots, empty ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Render + ?Sized> Default for BorrowedStore<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Render + ?Sized> Extend<&'a T> for BorrowedStore<'a, T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.slots.extend(iter.into_iter().map(Some));
    }
}

/// Renders reference slots in order, as seen by any non-owning collection.
///
/// A header carrying the slot count comes first, empty slots included. Each
/// empty slot yields one [`RenderLine::Null`]. Without slots, only a
/// [`RenderLine::Empty`] is emitted.
pub(crate) fn render_ref_slots<'e, T>(
    slots: impl ExactSizeIterator<Item = Option<&'e T>>,
) -> RenderOutput
where
    T: Render + ?Sized + 'e,
{
    let mut output = RenderOutput::new();

    if slots.len() == 0 {
        output.push(RenderLine::Empty {
            source: StoreSource::Borrowed,
        });
        return output;
    }

    output.push(RenderLine::Header {
        count: slots.len(),
        source: StoreSource::Borrowed,
    });

    for (index, slot) in slots.enumerate() {
        match slot {
            Some(element) => output.push(RenderLine::Element(element.render())),
            None => {
                warn!(index; "Skipping empty reference slot");
                output.push(RenderLine::Null);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Line, Point, Rectangle};

    #[test]
    fn test_borrowed_store_new_is_empty() {
        let store: BorrowedStore<'_, Element> = BorrowedStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_render_all_refs_on_empty_store() {
        let store: BorrowedStore<'_, Element> = BorrowedStore::new();
        let output = store.render_all_refs();

        assert_eq!(
            output.lines(),
            &[RenderLine::Empty {
                source: StoreSource::Borrowed
            }]
        );
    }

    #[test]
    fn test_render_all_refs_mixed_shapes() {
        let point = Point::new(11, 12);
        let line = Line::new(22, 23, 124, 125);
        let rect = Rectangle::new(33, 34, 234, 75);

        let mut store: BorrowedStore<'_, dyn Render> = BorrowedStore::new();
        store.add_ref(&point);
        store.add_ref(&line);
        store.add_ref(&rect);

        let output = store.render_all_refs();
        assert_eq!(
            output.elements().collect::<Vec<_>>(),
            vec![
                "Rendering a point (11, 12)",
                "Rendering a line from (22, 23) to (124, 125)",
                "Rendering a rectangle of dimension 234x75, from (33, 34)",
            ]
        );
    }

    #[test]
    fn test_null_slot_is_reported_once_and_traversal_continues() {
        let first = Element::from(Point::new(1, 1));
        let last = Element::from(Point::new(2, 2));

        let mut store = BorrowedStore::new();
        store.add_ref(&first);
        store.add_null();
        store.add_ref(&last);

        let output = store.render_all_refs();

        assert_eq!(
            output.lines(),
            &[
                RenderLine::Header {
                    count: 3,
                    source: StoreSource::Borrowed
                },
                RenderLine::Element("Rendering a point (1, 1)".to_string()),
                RenderLine::Null,
                RenderLine::Element("Rendering a point (2, 2)".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_refs_leaves_referents_intact() {
        let elements = vec![
            Element::from(Point::new(45, 55)),
            Element::from(Line::new(88, 98, 456, 987)),
        ];

        let mut store: BorrowedStore<'_, Element> = BorrowedStore::new();
        store.extend(elements.iter());
        assert_eq!(store.len(), 2);

        store.clear_refs();
        assert!(store.is_empty());

        // The referents are still owned and usable by the caller.
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].render(), "Rendering a point (45, 55)");
    }

    #[test]
    fn test_render_ref_slots_counts_empty_slots_in_header() {
        let point = Element::from(Point::new(5, 6));
        let output = render_ref_slots([None, Some(&point), None].into_iter());

        assert_eq!(
            output.lines().first(),
            Some(&RenderLine::Header {
                count: 3,
                source: StoreSource::Borrowed
            })
        );
        assert_eq!(output.null_count(), 2);
        assert_eq!(output.elements().collect::<Vec<_>>(), vec!["Rendering a point (5, 6)"]);
    }

    #[test]
    fn test_add_slot() {
        let point = Point::new(3, 4);

        let mut store = BorrowedStore::new();
        store.add_slot(Some(&point));
        store.add_slot(None);

        let output = store.render_all_refs();
        assert_eq!(output.elements().count(), 1);
        assert_eq!(output.null_count(), 1);
    }
}
