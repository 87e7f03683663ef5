//! Key-addressed element storage.
//!
//! An [`ElementArena`] owns every element inserted into it and hands back a
//! copyable [`ElementId`]. Ids are plain keys, not references: holding one
//! never keeps the arena borrowed, and resolving one against the arena is
//! always checked.
//!
//! Elements are only released all at once with [`ElementArena::clear`].
//! Each arena carries its own tag, and clearing takes a fresh one, so an id
//! minted by a different arena, or before the last clear, never resolves to
//! an unrelated element.
//!
//! ```
//! use easel_core::{arena::ElementArena, factory};
//!
//! let mut arena = ElementArena::new();
//! let id = arena.insert(factory::point_element(45, 55));
//!
//! assert_eq!(arena.get(id), Some(&factory::point_element(45, 55)));
//!
//! let other = ElementArena::new();
//! assert_eq!(other.get(id), None);
//! ```

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::element::Element;

/// Source of unique arena tags.
static NEXT_ARENA_TAG: AtomicU64 = AtomicU64::new(0);

fn next_tag() -> u64 {
    NEXT_ARENA_TAG.fetch_add(1, Ordering::Relaxed)
}

/// Key of an element stored in an [`ElementArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    arena: u64,
    index: usize,
}

impl ElementId {
    /// Returns the position of the element within its arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}@{}", self.index, self.arena)
    }
}

/// Storage owning a set of elements, addressed by [`ElementId`].
#[derive(Debug)]
pub struct ElementArena {
    tag: u64,
    elements: Vec<Element>,
}

impl ElementArena {
    /// Creates a new empty arena with a fresh tag.
    pub fn new() -> Self {
        Self {
            tag: next_tag(),
            elements: Vec::new(),
        }
    }

    /// Moves `element` into the arena and returns its key.
    pub fn insert(&mut self, element: impl Into<Element>) -> ElementId {
        let id = ElementId {
            arena: self.tag,
            index: self.elements.len(),
        };
        self.elements.push(element.into());
        id
    }

    /// Returns true if `id` was minted by this arena.
    pub fn contains(&self, id: ElementId) -> bool {
        id.arena == self.tag && id.index < self.elements.len()
    }

    /// Resolves `id` to the element it names.
    ///
    /// Returns `None` for ids minted by another arena.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        if id.arena != self.tag {
            return None;
        }
        self.elements.get(id.index)
    }

    /// Releases every element and returns how many were released.
    ///
    /// Ids minted before the call no longer resolve.
    pub fn clear(&mut self) -> usize {
        let count = self.elements.len();
        self.elements.clear();
        self.tag = next_tag();
        count
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over `(id, element)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        let tag = self.tag;
        self.elements
            .iter()
            .enumerate()
            .map(move |(index, element)| (ElementId { arena: tag, index }, element))
    }
}

impl Default for ElementArena {
    fn default() -> Self {
        Self::new()
    }
}
