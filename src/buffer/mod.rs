//! Line-oriented text buffer and cursor state.

pub mod document;
pub mod text_area;

pub use document::{Document, Location};
pub use text_area::{Selection, TextArea};
