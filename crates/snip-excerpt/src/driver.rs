//! Per-document and per-corpus excerpt extraction.

use std::ops::Range;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    DEFAULT_MARGIN_RATIO, ExcerptError, locate::locate_in, margin_for, merge_windows,
    render::render_in, text::CharText,
};

/// A document to extract excerpts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier, usually a path relative to the corpus root.
    pub id: String,
    /// Decoded text content.
    pub text: String,
}

impl Document {
    /// Creates a document from an identifier and its text.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Tunables for an extraction run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// Fraction of a document's char length used as the margin.
    pub margin_ratio: f64,
    /// Process documents on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            margin_ratio: DEFAULT_MARGIN_RATIO,
            parallel: true,
        }
    }
}

/// Excerpt extracted from a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    /// Identifier of the source document.
    pub id: String,
    /// Margin applied around each occurrence, in chars.
    pub margin: usize,
    /// Merged windows as char ranges, sorted and disjoint.
    pub windows: Vec<Range<usize>>,
    /// Rendered excerpt text, including the trailing keyword line.
    pub output: String,
}

impl Excerpt {
    /// Number of merged windows in this document.
    pub fn match_count(&self) -> usize {
        self.windows.len()
    }
}

/// A document whose extraction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    /// Identifier of the failed document.
    pub id: String,
    /// Why extraction failed.
    pub error: ExcerptError,
}

/// Outcome of running extraction over a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    /// Excerpts for documents with at least one window, in input order.
    pub excerpts: Vec<Excerpt>,
    /// Documents that failed, in input order.
    pub failures: Vec<DocumentFailure>,
    /// Number of documents scanned.
    pub documents: usize,
}

impl CorpusReport {
    /// Sum of match counts over all excerpts.
    pub fn total_matches(&self) -> usize {
        self.excerpts.iter().map(Excerpt::match_count).sum()
    }

    /// Documents that produced no windows.
    pub fn skipped(&self) -> usize {
        self.documents - self.excerpts.len() - self.failures.len()
    }
}

/// Extracts keyword excerpts using a keyword list fixed for the whole run.
#[derive(Debug, Clone)]
pub struct Extractor {
    /// Keywords in their original order.
    keywords: Vec<String>,
    /// Run options.
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor, validating the margin ratio up front.
    pub fn new(keywords: Vec<String>, options: ExtractOptions) -> Result<Self, ExcerptError> {
        margin_for(0, options.margin_ratio)?;
        Ok(Self { keywords, options })
    }

    /// Returns the keyword list.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Extracts the excerpt for one document.
    ///
    /// Occurrences of every keyword are pooled before merging, so windows from
    /// different keywords combine. Returns `Ok(None)` when the document has no
    /// windows; such documents are skipped.
    pub fn extract(&self, document: &Document) -> Result<Option<Excerpt>, ExcerptError> {
        let text = CharText::new(&document.text);
        let margin = margin_for(text.char_len(), self.options.margin_ratio)?;

        let mut intervals = Vec::new();
        for keyword in &self.keywords {
            intervals.extend(locate_in(&text, keyword, margin));
        }

        let windows = merge_windows(intervals);
        if windows.is_empty() {
            debug!(id = %document.id, "no keyword occurrences");
            return Ok(None);
        }

        let output = render_in(&text, &windows, &self.keywords);
        debug!(id = %document.id, margin, windows = windows.len(), "extracted excerpt");

        Ok(Some(Excerpt {
            id: document.id.clone(),
            margin,
            windows,
            output,
        }))
    }

    /// Extracts excerpts for every document.
    ///
    /// A failing document is recorded and does not stop the run. Results keep
    /// the input order even when documents are processed in parallel.
    pub fn run(&self, documents: &[Document]) -> CorpusReport {
        let results: Vec<Result<Option<Excerpt>, ExcerptError>> = if self.options.parallel {
            documents.par_iter().map(|doc| self.extract(doc)).collect()
        } else {
            documents.iter().map(|doc| self.extract(doc)).collect()
        };

        let mut report = CorpusReport {
            documents: documents.len(),
            ..CorpusReport::default()
        };

        for (document, result) in documents.iter().zip(results) {
            match result {
                Ok(Some(excerpt)) => report.excerpts.push(excerpt),
                Ok(None) => {}
                Err(error) => {
                    warn!(id = %document.id, %error, "extraction failed");
                    report.failures.push(DocumentFailure {
                        id: document.id.clone(),
                        error,
                    });
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds an extractor with default options.
    fn extractor(words: &[&str]) -> Extractor {
        let keywords = words.iter().map(|w| (*w).to_string()).collect();
        Extractor::new(keywords, ExtractOptions::default()).unwrap()
    }

    #[test]
    fn extract_fox_example() {
        let doc = Document::new("fox.txt", "The quick brown fox jumps over the lazy dog");
        let excerpt = extractor(&["fox"]).extract(&doc).unwrap().unwrap();

        assert_eq!(excerpt.margin, 1);
        assert_eq!(excerpt.windows, vec![15..20]);
        assert_eq!(excerpt.output, " fox \n\nfox\n");
        assert_eq!(excerpt.match_count(), 1);
    }

    #[test]
    fn extract_merges_across_keywords() {
        let doc = Document::new("ab.txt", "aaXbb");
        let excerpt = extractor(&["aaX", "Xbb"]).extract(&doc).unwrap().unwrap();

        assert_eq!(excerpt.windows, vec![0..5]);
        assert_eq!(excerpt.output, "aaXbb\n\naaX,Xbb\n");
        assert_eq!(excerpt.match_count(), 1);
    }

    #[test]
    fn extract_skips_documents_without_matches() {
        let doc = Document::new("none.txt", "nothing to see here");
        assert!(extractor(&["fox"]).extract(&doc).unwrap().is_none());
    }

    #[test]
    fn extract_skips_degenerate_inputs() {
        let empty = Document::new("empty.txt", "");
        assert!(extractor(&["fox"]).extract(&empty).unwrap().is_none());

        let doc = Document::new("doc.txt", "a fox");
        assert!(extractor(&[]).extract(&doc).unwrap().is_none());
        assert!(extractor(&[""]).extract(&doc).unwrap().is_none());
    }

    #[test]
    fn extract_keyword_order_does_not_change_windows() {
        let doc = Document::new("d.txt", "red apples and green pears and red pears");
        let a = extractor(&["red", "pears"]).extract(&doc).unwrap().unwrap();
        let b = extractor(&["pears", "red"]).extract(&doc).unwrap().unwrap();

        assert_eq!(a.windows, b.windows);
        assert!(a.output.ends_with("red,pears\n"));
        assert!(b.output.ends_with("pears,red\n"));
    }

    #[test]
    fn new_rejects_invalid_ratio() {
        let options = ExtractOptions {
            margin_ratio: -1.0,
            parallel: false,
        };
        assert!(Extractor::new(vec!["a".into()], options).is_err());
    }

    #[test]
    fn extract_huge_ratio_covers_whole_text() {
        let options = ExtractOptions {
            margin_ratio: 1e30,
            parallel: false,
        };
        let extractor = Extractor::new(vec!["b".to_string()], options).unwrap();
        let excerpt = extractor
            .extract(&Document::new("abc.txt", "abc"))
            .unwrap()
            .unwrap();

        assert_eq!(excerpt.windows, vec![0..3]);
        assert_eq!(excerpt.output, "abc\n\nb\n");
    }

    #[test]
    fn run_aggregates_counts_in_input_order() {
        let docs = vec![
            Document::new("a.txt", "one fish two fish red fish blue fish"),
            Document::new("b.txt", "no matches"),
            Document::new("c.txt", "a single fish"),
        ];
        let report = extractor(&["fish"]).run(&docs);

        let ids: Vec<_> = report.excerpts.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a.txt", "c.txt"]);
        assert_eq!(report.documents, 3);
        assert_eq!(report.skipped(), 1);
        assert!(report.failures.is_empty());
        assert_eq!(
            report.total_matches(),
            report.excerpts[0].match_count() + report.excerpts[1].match_count()
        );
    }

    #[test]
    fn run_parallel_matches_sequential() {
        let docs: Vec<_> = (0..50)
            .map(|i| Document::new(format!("{i}.txt"), format!("doc {i} mentions rust {i} times")))
            .collect();
        let keywords = vec!["rust".to_string(), "doc".to_string()];

        let parallel = Extractor::new(keywords.clone(), ExtractOptions::default())
            .unwrap()
            .run(&docs);
        let sequential = Extractor::new(
            keywords,
            ExtractOptions {
                parallel: false,
                ..ExtractOptions::default()
            },
        )
        .unwrap()
        .run(&docs);

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.excerpts.len(), 50);
    }
}
