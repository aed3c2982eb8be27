//! Error types for excerpt extraction.

use thiserror::Error;

/// Errors that can occur while extracting excerpts from a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExcerptError {
    /// An argument was outside its valid domain (margin below one, bad ratio).
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected value.
        message: String,
    },
}

impl ExcerptError {
    /// Creates an `InvalidInput` error for a margin below one character.
    pub(crate) fn margin(margin: usize) -> Self {
        Self::InvalidInput {
            message: format!("margin must be at least 1, got {margin}"),
        }
    }

    /// Creates an `InvalidInput` error for a margin ratio that is negative or not finite.
    pub(crate) fn margin_ratio(ratio: f64) -> Self {
        Self::InvalidInput {
            message: format!("margin ratio must be a finite value >= 0, got {ratio}"),
        }
    }
}
