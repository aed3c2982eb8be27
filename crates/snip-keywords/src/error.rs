//! Error types for keyword sources.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while resolving keywords.
#[derive(Debug, Error)]
pub enum KeywordError {
    /// Failed to read a keyword file.
    #[error("failed to read keyword file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// An extraction algorithm name was not recognised.
    #[error("unknown algorithm '{0}', expected one of: textrank, rake, yake")]
    UnknownAlgorithm(String),

    /// A description to extract keywords from was empty.
    #[error("cannot extract keywords from an empty description")]
    EmptyDescription,
}
