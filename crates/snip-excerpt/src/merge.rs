//! Merging expanded occurrence intervals into excerpt windows.

use std::ops::Range;

/// Merges intervals into the minimal sorted sequence of disjoint windows.
///
/// Intervals are ordered by `(start, end)` and swept left to right. An interval
/// that overlaps or touches the current window (`start <= current.end`) extends
/// it; anything further right opens a new window. Consecutive windows in the
/// result therefore satisfy `prev.end < next.start`.
pub fn merge_windows(mut intervals: Vec<Range<usize>>) -> Vec<Range<usize>> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_unstable_by_key(|r| (r.start, r.end));

    let mut merged = Vec::with_capacity(intervals.len());
    let mut iter = intervals.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for range in iter {
        if range.start > current.end {
            merged.push(current);
            current = range;
        } else {
            current.end = current.end.max(range.end);
        }
    }
    merged.push(current);

    merged
}
