//! Error types for the editor

use thiserror::Error;

/// The mutation path is total by design; only the JSON snapshot boundary
/// can fail.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}
