//! Error types for drawing operations.

use thiserror::Error;

use crate::arena::ElementId;

/// Errors raised by [`Drawing`](crate::drawing::Drawing) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawingError {
    /// The id was minted by a different drawing's arena.
    #[error("{0} does not belong to this drawing")]
    ForeignElement(ElementId),
}
