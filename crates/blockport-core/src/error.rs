//! Error types for Blockport

use thiserror::Error;

/// Result type alias using Blockport's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Blockport operations
#[derive(Error, Debug)]
pub enum Error {
    /// No mesh objects in the selection; nothing to export
    #[error("No mesh objects selected")]
    EmptySelection,

    /// Axis mapping is not a permutation of {0, 1, 2}
    #[error("Invalid axis mapping: {0}")]
    InvalidMapping(String),

    /// IO error while writing the model file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
