//! Ordered render output.
//!
//! Stores never print. Rendering a store produces a [`RenderOutput`]: the
//! sequence of [`RenderLine`]s in the order they were emitted. Callers decide
//! where the text goes and which informational lines to keep.
//!
//! # Example
//!
//! ```
//! use easel_core::render::{RenderLine, RenderOptions, RenderOutput, StoreSource};
//!
//! let mut output = RenderOutput::new();
//! output.push(RenderLine::Header { count: 1, source: StoreSource::Owned });
//! output.push(RenderLine::Element("Rendering a point (1, 2)".to_string()));
//!
//! assert_eq!(output.elements().count(), 1);
//! assert_eq!(
//!     output.to_text(&RenderOptions::default()),
//!     "Rendering 1 elements from owned handles\nRendering a point (1, 2)\n"
//! );
//! ```

use std::{fmt, io};

/// Identifies which store produced a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreSource {
    /// Elements held through exclusive ownership.
    Owned,
    /// Elements observed through non-owning references.
    Borrowed,
}

impl StoreSource {
    /// Returns the wording used for this source in informational lines.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Owned => "owned handles",
            Self::Borrowed => "references",
        }
    }
}

/// A single line of render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderLine {
    /// Announces how many elements a store is about to render.
    Header { count: usize, source: StoreSource },
    /// The description produced by one element.
    Element(String),
    /// The store had nothing to render.
    Empty { source: StoreSource },
    /// A reference slot was empty and has been skipped.
    Null,
    /// Owned elements were released.
    Released { count: usize },
}

impl RenderLine {
    /// Returns true if this line describes an element rather than the traversal.
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header { count, source } => {
                write!(f, "Rendering {count} elements from {}", source.describe())
            }
            Self::Element(text) => f.write_str(text),
            Self::Empty { source } => write!(f, "Collection of {} is empty", source.describe()),
            Self::Null => f.write_str("  ** Null pointer"),
            Self::Released { count } => write!(f, "* Releasing {count} elements"),
        }
    }
}

/// Selects which informational lines are written out.
///
/// Element lines are always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    headers: bool,
    notices: bool,
}

impl RenderOptions {
    /// Creates options with the given header and notice visibility.
    pub fn new(headers: bool, notices: bool) -> Self {
        Self { headers, notices }
    }

    /// Returns options that keep only element lines.
    pub fn elements_only() -> Self {
        Self::new(false, false)
    }

    fn keeps(&self, line: &RenderLine) -> bool {
        if line.is_element() {
            true
        } else if line.is_header() {
            self.headers
        } else {
            self.notices
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(true, true)
    }
}

/// Lines emitted while rendering one or more stores, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    lines: Vec<RenderLine>,
}

impl RenderOutput {
    /// Creates a new empty `RenderOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&mut self, line: RenderLine) {
        self.lines.push(line);
    }

    /// Appends every line of `other` after the lines already held.
    pub fn merge(&mut self, other: RenderOutput) {
        self.lines.extend(other.lines);
    }

    /// Returns true if no line has been emitted.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<RenderLine> {
        self.lines
    }

    /// Iterates over the element descriptions only, in emission order.
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            RenderLine::Element(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Iterates over every line that is not an element description.
    pub fn notices(&self) -> impl Iterator<Item = &RenderLine> {
        self.lines.iter().filter(|line| !line.is_element())
    }

    /// Returns how many empty reference slots were skipped.
    pub fn null_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, RenderLine::Null))
            .count()
    }

    /// Returns how many "empty store" notices were emitted.
    pub fn empty_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, RenderLine::Empty { .. }))
            .count()
    }

    /// Writes the lines kept by `options`, one per row.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `writer`.
    pub fn write_to(&self, mut writer: impl io::Write, options: &RenderOptions) -> io::Result<()> {
        for line in self.lines.iter().filter(|line| options.keeps(line)) {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Renders the lines kept by `options` into a string.
    pub fn to_text(&self, options: &RenderOptions) -> String {
        self.lines
            .iter()
            .filter(|line| options.keeps(line))
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

impl Extend<RenderLine> for RenderOutput {
    fn extend<I: IntoIterator<Item = RenderLine>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}
