//! Element collections with explicit ownership disciplines.
//!
//! - [`OwnedStore`] holds its elements exclusively. Adding moves the element
//!   in; clearing or dropping the store releases every element exactly once.
//! - [`BorrowedStore`] observes elements owned elsewhere. The borrow checker
//!   guarantees every referent outlives the store, so a dangling slot cannot
//!   be constructed.
//!
//! Neither store prints; both render into a [`RenderOutput`](crate::render::RenderOutput).

mod borrowed;
mod owned;

pub use borrowed::BorrowedStore;
pub(crate) use borrowed::render_ref_slots;
pub use owned::OwnedStore;
