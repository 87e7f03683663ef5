//! Provides `OwnedStore`, a collection that exclusively owns its elements.

use log::{debug, trace, warn};

use crate::{
    element::{Element, Render},
    render::{RenderLine, RenderOutput, StoreSource},
};

/// A collection of elements held through exclusive ownership.
///
/// Elements are rendered in insertion order. Each element is dropped exactly
/// once: when [`clear`](Self::clear) is called or when the store itself is
/// dropped, whichever comes first.
///
/// # Example
///
/// ```
/// use easel_core::{element::{Line, Point, Rectangle}, store::OwnedStore};
///
/// let mut store: OwnedStore = OwnedStore::new();
/// store.add_owned(Point::new(10, 15).into());
/// store.add_owned(Line::new(25, 25, 50, 100).into());
/// store.add_owned(Rectangle::new(50, 50, 100, 75).into());
///
/// let output = store.render_all();
/// assert_eq!(output.elements().count(), 3);
///
/// assert_eq!(store.clear(), 3);
/// assert!(store.is_empty());
/// ```
#[derive(Debug)]
pub struct OwnedStore<T: Render = Element> {
    elements: Vec<T>,
}

impl<T: Render> OwnedStore<T> {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Moves `element` to the end of the store.
    pub fn add_owned(&mut self, element: T) {
        trace!(element:? = element; "Adding owned element");
        self.elements.push(element);
    }

    /// Moves the element out of `slot` into the store.
    ///
    /// An empty slot is skipped rather than stored. Returns whether an
    /// element was added.
    pub fn add_slot(&mut self, slot: Option<T>) -> bool {
        match slot {
            Some(element) => {
                self.add_owned(element);
                true
            }
            None => {
                warn!("Skipping empty element handle");
                false
            }
        }
    }

    /// Renders every element in insertion order.
    ///
    /// An empty store emits a single [`RenderLine::Empty`] and nothing else.
    pub fn render_all(&self) -> RenderOutput {
        let mut output = RenderOutput::new();

        if self.elements.is_empty() {
            output.push(RenderLine::Empty {
                source: StoreSource::Owned,
            });
            return output;
        }

        output.push(RenderLine::Header {
            count: self.elements.len(),
            source: StoreSource::Owned,
        });
        output.extend(
            self.elements
                .iter()
                .map(|element| RenderLine::Element(element.render())),
        );

        output
    }

    /// Releases every element and returns how many were released.
    ///
    /// Clearing an empty store is a no-op returning zero.
    pub fn clear(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        if count > 0 {
            debug!(count; "Released owned elements");
        }
        count
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T: Render> Default for OwnedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Render> Extend<T> for OwnedStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_owned(element);
        }
    }
}

impl<T: Render> FromIterator<T> for OwnedStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

/// Hands ownership of every element back to the caller, in insertion order.
impl<T: Render> IntoIterator for OwnedStore<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
