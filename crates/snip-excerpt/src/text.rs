//! Character-offset view over document text.
//!
//! Every interval in this crate is measured in Unicode scalar values. Substring
//! search runs on bytes, so offsets are translated at the boundary.

use std::{iter, ops::Range};

/// Document text with a char <-> byte offset table.
///
/// ASCII text skips the table entirely since the two offset spaces coincide.
pub struct CharText<'a> {
    /// The underlying text.
    text: &'a str,
    /// Byte offset of every char, followed by `text.len()`. `None` for ASCII text.
    boundaries: Option<Vec<usize>>,
}

impl<'a> CharText<'a> {
    /// Builds the offset table for `text`.
    pub fn new(text: &'a str) -> Self {
        let boundaries = if text.is_ascii() {
            None
        } else {
            Some(
                text.char_indices()
                    .map(|(i, _)| i)
                    .chain(iter::once(text.len()))
                    .collect(),
            )
        };
        Self { text, boundaries }
    }

    /// Returns the raw text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length of the text in chars.
    pub fn char_len(&self) -> usize {
        match &self.boundaries {
            None => self.text.len(),
            Some(b) => b.len() - 1,
        }
    }

    /// Converts a char offset (at most `char_len`) to a byte offset.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        match &self.boundaries {
            None => char_offset,
            Some(b) => b[char_offset],
        }
    }

    /// Converts a byte offset on a char boundary to a char offset.
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        match &self.boundaries {
            None => byte_offset,
            Some(b) => b.partition_point(|&start| start < byte_offset),
        }
    }

    /// Returns the substring covered by a char range.
    pub fn slice(&self, range: Range<usize>) -> &'a str {
        &self.text[self.byte_offset(range.start)..self.byte_offset(range.end)]
    }
}
