//! Error types for snip-corpus.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading documents.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The source path does not exist.
    #[error("source not found: {path}")]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// A file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A zip archive could not be opened or an entry could not be located.
    #[error("malformed archive {path}: {source}")]
    Archive {
        /// Path to the archive.
        path: PathBuf,
        /// Underlying zip error.
        #[source]
        source: zip::result::ZipError,
    },

    /// An archive entry could not be decompressed.
    #[error("failed to read entry {entry} in {path}: {source}")]
    ReadEntry {
        /// Path to the archive.
        path: PathBuf,
        /// Entry name within the archive.
        entry: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An include or exclude glob failed to compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying globset error.
        #[source]
        source: globset::Error,
    },
}
