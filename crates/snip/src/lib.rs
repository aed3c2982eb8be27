//! snip: keyword excerpts from document collections.
//!
//! Given a set of keywords and a corpus (a directory, a zip archive, or a
//! single file), snip finds every keyword occurrence in each document, pads
//! it with a margin proportional to the document's length, merges overlapping
//! windows, and emits one excerpt per document that matched.

#![warn(missing_docs)]

pub mod cli;
