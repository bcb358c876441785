//! # Vitae Editor
//!
//! Document editing engine for the Vitae CV canvas.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ importer: HTML text → Document              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditorStore                         │
//! │  - Owns current Document + Selection        │
//! │  - Applies semantic mutations               │
//! │  - Publishes a fresh snapshot per change    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host canvas: renders snapshots, turns       │
//! │ gestures back into mutations                │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is the single writer**: every document change flows
//!    through [`EditorStore::apply`]; readers only ever see published
//!    snapshots.
//! 2. **Mutations are total**: an operation against a missing id or a
//!    wrong-shape section is a silent no-op, never an error — a miss means
//!    a stale gesture, which must stay harmless.
//! 3. **Change is detectable by identity**: each applied mutation
//!    publishes a new `Arc<Document>`; a no-op keeps the old allocation.
//! 4. **Selection never dangles**: the store drops a selection whose path
//!    a mutation invalidated.
//!
//! ## Usage
//!
//! ```rust
//! use vitae_editor::{EditorStore, Mutation};
//! use vitae_model::SectionKind;
//!
//! let mut store = EditorStore::with_starter();
//!
//! let outcome = store.apply(Mutation::AddSection {
//!     kind: SectionKind::Skills,
//! });
//! assert!(outcome.is_applied());
//! ```

mod errors;
mod mutations;
mod store;
mod templates;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationOutcome};
pub use store::EditorStore;
pub use templates::{new_entry, new_section, starter_document};

// Re-export the model for convenience
pub use vitae_model::{
    ContentItem, Document, IdGenerator, ItemKind, SectionItems, SectionKind, SectionNode,
    Selection, StyleMap,
};
