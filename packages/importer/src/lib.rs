//! # Vitae HTML Importer
//!
//! One-way, best-effort translation from an arbitrary HTML fragment into a
//! [`vitae_model::Document`]. The importer is heuristic and lossy by
//! contract: it never fails on malformed input, degrades unrecognized
//! structure silently, and always produces at least one section (falling
//! back to a single catch-all section wrapping the raw text).
//!
//! ```text
//! HTML text → tokenizer → element tree → heuristics → Document
//! ```
//!
//! DOM parsing is a capability, not an assumption: the heuristics run
//! against the [`dom::MarkupCapability`] trait, backed by the built-in
//! tokenizer by default. A host without any markup reader constructs the
//! importer detached and gets an empty document instead of a crash.

pub mod dom;
pub mod importer;
pub mod tokenizer;

pub use dom::{BuiltinMarkup, DomElement, DomNode, MarkupCapability};
pub use importer::{import, HtmlImporter};
pub use tokenizer::{tokenize, Token};
