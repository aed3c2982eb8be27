//! Rendering merged windows into excerpt text.

use std::ops::Range;

use crate::text::CharText;

/// Separator appended after every window's text.
pub const WINDOW_SEPARATOR: &str = "\n\n";

/// Delimiter between keywords on the trailing keyword line.
pub const KEYWORD_DELIMITER: &str = ",";

/// Renders the excerpt for `text`.
///
/// Each window's substring is written in order followed by a blank line, then
/// the keywords are written comma-joined on a final line in their original
/// order. Windows are char ranges, as returned by [`merge_windows`].
///
/// # Panics
///
/// Panics if a window ends past `char_len(text)` or starts after its end.
///
/// [`merge_windows`]: crate::merge_windows
pub fn render(text: &str, windows: &[Range<usize>], keywords: &[String]) -> String {
    render_in(&CharText::new(text), windows, keywords)
}

/// Renders against a prepared offset table.
pub(crate) fn render_in(text: &CharText<'_>, windows: &[Range<usize>], keywords: &[String]) -> String {
    let body: usize = windows.iter().map(|w| w.end - w.start).sum();
    let mut output = String::with_capacity(body + windows.len() * WINDOW_SEPARATOR.len() + 64);

    for window in windows {
        output.push_str(text.slice(window.clone()));
        output.push_str(WINDOW_SEPARATOR);
    }
    output.push_str(&keywords.join(KEYWORD_DELIMITER));
    output.push('\n');

    output
}
