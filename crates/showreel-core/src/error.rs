//! Error types for Showreel

use thiserror::Error;

/// Main error type for Showreel operations
#[derive(Error, Debug)]
pub enum ShowreelError {
    /// Site content was structurally invalid
    #[error("Content error: {0}")]
    Content(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
