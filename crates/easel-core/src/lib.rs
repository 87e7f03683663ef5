//! Easel Core Types and Definitions
//!
//! This crate provides the drawing elements of Easel and the containers that
//! hold them. It includes:
//!
//! - **Elements**: The [`element::Render`] capability and the closed set of
//!   shape variants ([`element`] module)
//! - **Factory**: Constructors returning owned handles ([`factory`] module)
//! - **Stores**: Owning and borrowing element collections ([`store`] module)
//! - **Arena**: Key-addressed element storage ([`arena`] module)
//! - **Drawing**: The aggregate tying the stores together ([`drawing::Drawing`])
//! - **Render output**: Ordered render lines ([`render`] module)

pub mod arena;
pub mod drawing;
pub mod element;
pub mod factory;
pub mod render;
pub mod store;

mod error;

pub use error::DrawingError;
