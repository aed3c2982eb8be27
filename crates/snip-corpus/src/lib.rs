//! Document sources for snip.
//!
//! A corpus is either a directory tree, a zip archive, or a single file.
//! [`open_source`] picks the right [`DocumentSource`] for a path; directory and
//! archive sources apply a [`DocumentFilter`]. Every source yields
//! [`Document`]s with lossily decoded UTF-8 text.

#![warn(missing_docs)]

mod error;
mod filter;
mod source;

pub use error::CorpusError;
pub use filter::{DEFAULT_INCLUDE, DEFAULT_MAX_DOCUMENT_BYTES, DocumentFilter};
pub use snip_excerpt::Document;
pub use source::{DirectorySource, DocumentSource, FileSource, ZipSource, open_source};
