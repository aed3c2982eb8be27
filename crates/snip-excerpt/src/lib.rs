//! Keyword excerpt extraction.
//!
//! Given a document and an ordered keyword list, this crate finds every keyword
//! occurrence, pads it with a margin proportional to the document's length, and
//! merges the padded intervals into the minimal set of disjoint windows. The
//! windows are rendered as the document's excerpt.
//!
//! The pipeline has three stages:
//!
//! 1. **Locate** ([`locate`]): non-overlapping left-to-right matches of one
//!    keyword, each expanded by the margin and clipped to the text.
//! 2. **Merge** ([`merge_windows`]): sort by `(start, end)` and sweep, joining
//!    overlapping and touching intervals.
//! 3. **Render** ([`render`]): window text separated by blank lines, followed by
//!    the comma-joined keyword list.
//!
//! [`Extractor`] drives the pipeline for a single document or a whole corpus.
//! All offsets are measured in Unicode scalar values. Nothing here performs I/O.

#![warn(missing_docs)]

mod driver;
mod error;
mod locate;
mod merge;
mod render;
mod text;

pub use driver::{CorpusReport, Document, DocumentFailure, Excerpt, ExtractOptions, Extractor};
pub use error::ExcerptError;
pub use locate::{DEFAULT_MARGIN_RATIO, locate, margin_for};
pub use merge::merge_windows;
pub use render::{KEYWORD_DELIMITER, WINDOW_SEPARATOR, render};
