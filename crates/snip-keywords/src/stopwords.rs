//! Stopword filtering for keyword extraction.
//!
//! Stopwords come from the `stop-words` crate (Stopwords ISO, English) plus any
//! caller-supplied extras. All words are stored lowercase.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// A case-insensitive stopword set.
#[derive(Debug, Clone)]
pub struct Stopwords {
    /// Lowercased stopwords.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates the default English stopword set.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Adds extra stopwords.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Checks if a term is a stopword, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }

    /// Returns the stopwords sorted, as the owned list the extractors expect.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Returns the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
