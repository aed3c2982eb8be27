//! Keyword sources for snip.
//!
//! An extraction run needs an ordered keyword list. It can come from the
//! command line, from a keyword file, or from a natural-language description
//! ranked by a local extraction algorithm (TextRank, RAKE, or YAKE). Sources
//! implement [`KeywordSource`] and can be combined with [`KeywordSet`].

#![warn(missing_docs)]

mod error;
mod extract;
mod source;
mod stopwords;

pub use error::KeywordError;
pub use extract::{KeywordAlgorithm, KeywordExtractor, ScoredKeyword};
pub use source::{
    DescriptionKeywords, KeywordFile, KeywordList, KeywordSet, KeywordSource, parse_keyword_lines,
};
pub use stopwords::Stopwords;
