//! Error types for Topix.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Topix operations.
pub type Result<T> = std::result::Result<T, TopixError>;

/// Errors that can occur in Topix.
#[derive(Debug, Error)]
pub enum TopixError {
    /// Duplicate topic id in the catalog.
    #[error("Duplicate topic id: {id}")]
    DuplicateTopic { id: u32 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl TopixError {
    /// Create a DuplicateTopic error.
    pub fn duplicate_topic(id: u32) -> Self {
        Self::DuplicateTopic { id }
    }
}
