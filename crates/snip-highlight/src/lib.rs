//! Terminal styling for snip.
//!
//! ANSI helpers for headers and status lines, keyword emphasis inside excerpt
//! text, and syntax-highlighted TOML for `snip config`.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights TOML for terminal output.
pub struct Highlighter {
    /// Language definitions; TOML comes from the two-face extras.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// Active theme.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter using the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML, ending with a color reset.
    ///
    /// Lines that fail to highlight are emitted unstyled.
    pub fn highlight_toml(&self, content: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let mut lines = HighlightLines::new(syntax, self.theme_set.get(self.theme));

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(colors::RESET);
        output
    }
}

/// ANSI escape codes.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (warnings, keyword matches).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Wraps text in a style and a trailing reset.
fn styled(style: &str, text: &str) -> String {
    format!("{style}{text}{}", colors::RESET)
}

/// Formats a document header (bold cyan).
pub fn header(text: &str) -> String {
    styled(&format!("{}{}", colors::BOLD, colors::CYAN), text)
}

/// Formats a subheader (bold).
pub fn subheader(text: &str) -> String {
    styled(colors::BOLD, text)
}

/// Formats secondary information (dim).
pub fn dim(text: &str) -> String {
    styled(colors::DIM, text)
}

/// Formats a success message (green).
pub fn success(text: &str) -> String {
    styled(colors::GREEN, text)
}

/// Formats a warning (yellow).
pub fn warning(text: &str) -> String {
    styled(colors::YELLOW, text)
}

/// Returns a dim horizontal rule `width` columns wide.
pub fn rule(width: usize) -> String {
    dim(&"─".repeat(width))
}

/// Wraps each keyword occurrence in `text` in bold yellow.
///
/// Text is scanned left to right. At each position the longest matching
/// keyword wins and scanning resumes after it, so highlights never nest.
pub fn emphasize<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    let keywords: Vec<&str> = keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let longest = keywords
            .iter()
            .filter(|k| rest.starts_with(**k))
            .max_by_key(|k| k.len());
        if let Some(keyword) = longest {
            output.push_str(colors::BOLD);
            output.push_str(colors::YELLOW);
            output.push_str(keyword);
            output.push_str(colors::RESET);
            rest = &rest[keyword.len()..];
        } else {
            output.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bold yellow opening sequence.
    const MARK: &str = "\x1b[1m\x1b[33m";

    #[test]
    fn toml_is_highlighted_and_reset() {
        let output = Highlighter::new().highlight_toml("[excerpt]\nmargin_ratio = 0.025\n");
        assert!(output.contains("\x1b[38;2;"));
        assert!(output.ends_with(colors::RESET));
        assert!(output.contains("margin_ratio"));
    }

    #[test]
    fn toml_syntax_is_bundled() {
        assert!(extra_syntaxes().find_syntax_by_extension("toml").is_some());
    }

    #[test]
    fn header_is_bold_cyan() {
        let h = header("report.txt");
        assert!(h.starts_with(colors::BOLD));
        assert!(h.contains(colors::CYAN));
        assert!(h.ends_with(colors::RESET));
        assert!(h.contains("report.txt"));
    }

    #[test]
    fn status_helpers_use_their_colors() {
        assert_eq!(warning("w"), format!("{}w{}", colors::YELLOW, colors::RESET));
        assert_eq!(success("s"), format!("{}s{}", colors::GREEN, colors::RESET));
        assert_eq!(dim("d"), format!("{}d{}", colors::DIM, colors::RESET));
    }

    #[test]
    fn rule_has_requested_width() {
        assert_eq!(rule(3), dim("───"));
    }

    #[test]
    fn emphasize_marks_every_occurrence() {
        let out = emphasize("fox and fox", &["fox"]);
        assert_eq!(
            out,
            format!("{MARK}fox{r} and {MARK}fox{r}", r = colors::RESET)
        );
    }

    #[test]
    fn emphasize_prefers_longest_keyword() {
        let out = emphasize("foxes", &["fox", "foxes"]);
        assert_eq!(out, format!("{MARK}foxes{}", colors::RESET));
    }

    #[test]
    fn emphasize_without_keywords_is_identity() {
        let empty: [&str; 0] = [];
        assert_eq!(emphasize("über café", &empty), "über café");
        assert_eq!(emphasize("text", &[""]), "text");
    }

    #[test]
    fn emphasize_handles_multibyte_text() {
        let out = emphasize("über café", &["café"]);
        assert_eq!(out, format!("über {MARK}café{}", colors::RESET));
    }
}
