//! Keyword occurrence location.

use std::ops::Range;

use crate::{ExcerptError, text::CharText};

/// Default fraction of a document's length used as the margin around each occurrence.
pub const DEFAULT_MARGIN_RATIO: f64 = 0.025;

/// Computes the margin for a document of `char_len` chars.
///
/// The margin is `floor(char_len * ratio)`, floored at one so that every
/// occurrence carries at least a single char of context on each side. Ratios
/// too large to represent saturate at `usize::MAX`.
pub fn margin_for(char_len: usize, ratio: f64) -> Result<usize, ExcerptError> {
    if !ratio.is_finite() || ratio < 0.0 {
        return Err(ExcerptError::margin_ratio(ratio));
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (char_len as f64 * ratio).floor() as usize;
    Ok(scaled.max(1))
}

/// Finds every occurrence of `keyword` in `text` and expands it by `margin` chars.
///
/// Matches are found left to right and the scan resumes at the end of the
/// previous match, so a self-overlapping keyword is only counted once per
/// non-overlapping run: `"aa"` in `"aaa"` yields a single occurrence.
///
/// Each occurrence `[start, end)` becomes `[start - margin, end + margin)`
/// clipped to `[0, char_len(text)]`. Offsets are in chars.
///
/// An empty keyword or empty text yields no intervals. A margin of zero is
/// rejected.
pub fn locate(text: &str, keyword: &str, margin: usize) -> Result<Vec<Range<usize>>, ExcerptError> {
    if margin < 1 {
        return Err(ExcerptError::margin(margin));
    }
    if keyword.is_empty() || text.is_empty() {
        return Ok(Vec::new());
    }

    Ok(locate_in(&CharText::new(text), keyword, margin))
}

/// Locates occurrences against a prepared offset table.
///
/// The caller guarantees `margin >= 1`.
pub(crate) fn locate_in(text: &CharText<'_>, keyword: &str, margin: usize) -> Vec<Range<usize>> {
    let mut intervals = Vec::new();
    if keyword.is_empty() {
        return intervals;
    }

    let haystack = text.as_str();
    let len = text.char_len();
    let mut from = 0;

    while let Some(pos) = haystack[from..].find(keyword) {
        let match_start = from + pos;
        let match_end = match_start + keyword.len();

        let start = text.char_offset(match_start);
        let end = text.char_offset(match_end);
        intervals.push(start.saturating_sub(margin)..end.saturating_add(margin).min(len));

        from = match_end;
    }

    intervals
}
