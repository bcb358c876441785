//! Vitae document model
//!
//! This crate defines the core data structures for the CV editor:
//! - The document tree (sections, nested entries, content items)
//! - Style maps attached to every node
//! - Selection state for the canvas
//! - Stable node identifiers

pub mod document;
pub mod id;
pub mod selection;

pub use document::*;
pub use id::*;
pub use selection::*;
