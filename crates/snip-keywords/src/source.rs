//! Keyword sources.
//!
//! A run resolves its keyword list once, from one or more sources, and shares
//! it read-only across every document.

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::{KeywordError, KeywordExtractor};

/// Supplies the ordered keyword list for an extraction run.
pub trait KeywordSource {
    /// Returns keywords in priority order.
    fn keywords(&self) -> Result<Vec<String>, KeywordError>;
}

/// Keywords given directly, e.g. on the command line.
#[derive(Debug, Clone, Default)]
pub struct KeywordList {
    /// Keywords in the order given.
    keywords: Vec<String>,
}

impl KeywordList {
    /// Wraps a list of keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl KeywordSource for KeywordList {
    fn keywords(&self) -> Result<Vec<String>, KeywordError> {
        Ok(self.keywords.clone())
    }
}

/// Keywords read from a text or CSV file.
///
/// Each non-blank line not starting with `#` is split on commas; fields are
/// trimmed and empty fields dropped. File order is preserved.
#[derive(Debug, Clone)]
pub struct KeywordFile {
    /// Path to the keyword file.
    path: PathBuf,
}

impl KeywordFile {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KeywordSource for KeywordFile {
    fn keywords(&self) -> Result<Vec<String>, KeywordError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| KeywordError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let keywords = parse_keyword_lines(&contents);
        debug!(path = %self.path.display(), count = keywords.len(), "read keyword file");
        Ok(keywords)
    }
}

/// Parses keyword file contents.
pub fn parse_keyword_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keywords extracted from a natural-language description.
#[derive(Debug, Clone)]
pub struct DescriptionKeywords {
    /// Text describing what to look for.
    description: String,
    /// Extractor used to rank candidate terms.
    extractor: KeywordExtractor,
    /// Maximum number of keywords returned.
    limit: usize,
}

impl DescriptionKeywords {
    /// Creates a source extracting at most `limit` keywords from `description`.
    pub fn new(description: impl Into<String>, extractor: KeywordExtractor, limit: usize) -> Self {
        Self {
            description: description.into(),
            extractor,
            limit,
        }
    }
}

impl KeywordSource for DescriptionKeywords {
    fn keywords(&self) -> Result<Vec<String>, KeywordError> {
        if self.description.trim().is_empty() {
            return Err(KeywordError::EmptyDescription);
        }

        let keywords: Vec<String> = self
            .extractor
            .extract(&self.description)
            .into_iter()
            .take(self.limit)
            .map(|k| k.term)
            .collect();
        debug!(
            algorithm = %self.extractor.algorithm(),
            count = keywords.len(),
            "extracted keywords from description"
        );
        Ok(keywords)
    }
}

/// Several sources concatenated in order.
#[derive(Default)]
pub struct KeywordSet {
    /// Sources queried in order.
    sources: Vec<Box<dyn KeywordSource>>,
}

impl KeywordSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source.
    pub fn push(&mut self, source: impl KeywordSource + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Returns true if no sources were added.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl KeywordSource for KeywordSet {
    fn keywords(&self) -> Result<Vec<String>, KeywordError> {
        let mut keywords = Vec::new();
        for source in &self.sources {
            keywords.extend(source.keywords()?);
        }
        Ok(keywords)
    }
}
