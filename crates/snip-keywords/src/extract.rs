//! Local keyword extraction algorithms.
//!
//! These extractors rank terms within a single piece of text without any
//! corpus statistics. They wrap the `keyword_extraction` crate.
//!
//! - **TextRank** (default): graph-based ranking similar to PageRank.
//! - **RAKE**: Rapid Automatic Keyword Extraction based on co-occurrence.
//! - **YAKE**: statistical extraction, good for short texts.

use std::{cmp::Ordering, fmt, str};

use keyword_extraction::{
    rake::{Rake, RakeParams},
    text_rank::{TextRank, TextRankParams},
    yake::{Yake, YakeParams},
};
use serde::Serialize;

use crate::{KeywordError, Stopwords};

/// Punctuation that delimits phrases for TextRank.
static PUNCTUATION: &[&str] = &[
    ".", ",", ":", ";", "!", "?", "(", ")", "[", "]", "{", "}", "\"", "'", "`", "-", "—", "–", "/",
    "\\", "|", "@", "#", "$", "%", "^", "&", "*", "+", "=", "<", ">", "~", "_",
];

/// Window size for the TextRank co-occurrence graph.
const TEXT_RANK_WINDOW: usize = 2;
/// Damping factor for the TextRank iteration.
const TEXT_RANK_DAMPING: f32 = 0.85;
/// Convergence tolerance for the TextRank iteration.
const TEXT_RANK_TOLERANCE: f32 = 0.00005;

/// Available keyword extraction algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordAlgorithm {
    /// TextRank graph-based ranking.
    #[default]
    TextRank,
    /// RAKE (Rapid Automatic Keyword Extraction).
    Rake,
    /// YAKE (Yet Another Keyword Extractor).
    Yake,
}

impl KeywordAlgorithm {
    /// Returns a brief description of the algorithm.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TextRank => "Graph-based ranking similar to PageRank",
            Self::Rake => "RAKE - key phrases based on word co-occurrence",
            Self::Yake => "Statistical approach, no training needed",
        }
    }
}

impl fmt::Display for KeywordAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextRank => write!(f, "textrank"),
            Self::Rake => write!(f, "rake"),
            Self::Yake => write!(f, "yake"),
        }
    }
}

impl str::FromStr for KeywordAlgorithm {
    type Err = KeywordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "textrank" | "text-rank" | "text_rank" => Ok(Self::TextRank),
            "rake" => Ok(Self::Rake),
            "yake" => Ok(Self::Yake),
            _ => Err(KeywordError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A keyword with its relevance score (higher is more relevant).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredKeyword {
    /// The extracted keyword or phrase.
    pub term: String,
    /// Relevance score.
    pub score: f32,
}

impl ScoredKeyword {
    /// Creates a new scored keyword.
    pub fn new(term: impl Into<String>, score: f32) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// Extracts ranked keywords from free text.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    /// Algorithm to run.
    algorithm: KeywordAlgorithm,
    /// Stopwords excluded from candidates.
    stopwords: Vec<String>,
    /// Longest phrase, in words.
    phrase_length: usize,
}

impl KeywordExtractor {
    /// Creates an extractor with English stopwords and three-word phrases.
    pub fn new(algorithm: KeywordAlgorithm) -> Self {
        Self::with_stopwords(algorithm, &Stopwords::new())
    }

    /// Creates an extractor with a custom stopword set.
    pub fn with_stopwords(algorithm: KeywordAlgorithm, stopwords: &Stopwords) -> Self {
        Self {
            algorithm,
            stopwords: stopwords.to_sorted_vec(),
            phrase_length: 3,
        }
    }

    /// Sets the longest phrase an extractor may return (at least one word).
    #[must_use]
    pub fn phrase_length(mut self, words: usize) -> Self {
        self.phrase_length = words.max(1);
        self
    }

    /// Returns the configured algorithm.
    pub fn algorithm(&self) -> KeywordAlgorithm {
        self.algorithm
    }

    /// Extracts keywords from `text`, most relevant first.
    pub fn extract(&self, text: &str) -> Vec<ScoredKeyword> {
        let mut keywords = match self.algorithm {
            KeywordAlgorithm::TextRank => self.text_rank(text),
            KeywordAlgorithm::Rake => self.rake(text),
            KeywordAlgorithm::Yake => self.yake(text),
        };
        keywords.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        keywords
    }

    /// Runs TextRank over the text.
    fn text_rank(&self, text: &str) -> Vec<ScoredKeyword> {
        let punctuation: Vec<String> = PUNCTUATION.iter().map(|s| (*s).to_string()).collect();
        let params = TextRankParams::All(
            text,
            &self.stopwords,
            Some(&punctuation),
            TEXT_RANK_WINDOW,
            TEXT_RANK_DAMPING,
            TEXT_RANK_TOLERANCE,
            Some(self.phrase_length),
        );

        TextRank::new(params)
            .get_ranked_word_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| ScoredKeyword::new(term, score))
            .collect()
    }

    /// Runs RAKE over the text.
    fn rake(&self, text: &str) -> Vec<ScoredKeyword> {
        let params =
            RakeParams::WithDefaultsAndPhraseLength(text, &self.stopwords, Some(self.phrase_length));

        Rake::new(params)
            .get_ranked_keyword_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| ScoredKeyword::new(term, score))
            .collect()
    }

    /// Runs YAKE over the text, inverting its lower-is-better scores.
    fn yake(&self, text: &str) -> Vec<ScoredKeyword> {
        let params = YakeParams::WithDefaults(text, &self.stopwords);

        Yake::new(params)
            .get_ranked_term_scores(usize::MAX)
            .into_iter()
            .map(|(term, score)| ScoredKeyword::new(term, 1.0 / (score + 0.0001)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TEXT: &str = "The merger agreement was signed by both companies. \
        The merger closes next quarter, and the agreement requires regulatory approval. \
        Regulators review every merger agreement for competition concerns.";

    #[test]
    fn algorithm_from_str() {
        assert_eq!(
            "textrank".parse::<KeywordAlgorithm>().unwrap(),
            KeywordAlgorithm::TextRank
        );
        assert_eq!(
            "Text-Rank".parse::<KeywordAlgorithm>().unwrap(),
            KeywordAlgorithm::TextRank
        );
        assert_eq!("rake".parse::<KeywordAlgorithm>().unwrap(), KeywordAlgorithm::Rake);
        assert_eq!("YAKE".parse::<KeywordAlgorithm>().unwrap(), KeywordAlgorithm::Yake);
        assert!(matches!(
            "tfidf".parse::<KeywordAlgorithm>(),
            Err(KeywordError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn algorithm_display_round_trips() {
        for algorithm in [
            KeywordAlgorithm::TextRank,
            KeywordAlgorithm::Rake,
            KeywordAlgorithm::Yake,
        ] {
            let parsed: KeywordAlgorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn each_algorithm_finds_topic_terms() {
        for algorithm in [
            KeywordAlgorithm::TextRank,
            KeywordAlgorithm::Rake,
            KeywordAlgorithm::Yake,
        ] {
            let keywords = KeywordExtractor::new(algorithm).extract(SAMPLE_TEXT);
            assert!(!keywords.is_empty(), "{algorithm} found nothing");
            assert!(
                keywords
                    .iter()
                    .any(|k| k.term.contains("merger") || k.term.contains("agreement")),
                "{algorithm} missed the topic: {keywords:?}"
            );
        }
    }

    #[test]
    fn results_are_sorted_by_score() {
        let keywords = KeywordExtractor::new(KeywordAlgorithm::Yake).extract(SAMPLE_TEXT);
        assert!(keywords.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(keywords.iter().all(|k| k.score > 0.0));
    }

    #[test]
    fn stopwords_are_not_returned_as_keywords() {
        let keywords = KeywordExtractor::new(KeywordAlgorithm::TextRank).extract(SAMPLE_TEXT);
        assert!(keywords.iter().all(|k| k.term != "the" && k.term != "and"));
    }

    #[test]
    fn extractors_handle_empty_text() {
        for algorithm in [
            KeywordAlgorithm::TextRank,
            KeywordAlgorithm::Rake,
            KeywordAlgorithm::Yake,
        ] {
            // Should not panic on empty text
            let _ = KeywordExtractor::new(algorithm).extract("");
        }
    }
}
