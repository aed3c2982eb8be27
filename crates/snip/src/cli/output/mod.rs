//! Rendering, JSON serialization, and file output for CLI results.

use std::{
    fs::{self, File},
    io::{self, Write},
    ops::Range,
    path::{Path, PathBuf},
    process::ExitCode,
};

use serde::Serialize;
use snip_excerpt::{CorpusReport, KEYWORD_DELIMITER};
use snip_highlight::{dim, emphasize, header, rule, warning};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Width of the rule printed under each document header.
const RULE_WIDTH: usize = 40;

/// JSON view of one document's excerpt.
#[derive(Serialize)]
struct JsonDocument<'a> {
    /// Document identifier.
    id: &'a str,
    /// Number of merged windows.
    match_count: usize,
    /// Merged windows as char ranges.
    windows: &'a [Range<usize>],
    /// Rendered excerpt text.
    excerpt: &'a str,
}

/// JSON view of a failed document.
#[derive(Serialize)]
struct JsonFailure<'a> {
    /// Document identifier.
    id: &'a str,
    /// Error message.
    error: String,
}

/// JSON output for `snip extract --json`.
#[derive(Serialize)]
pub struct ExtractJson<'a> {
    /// Keywords used for the run.
    keywords: &'a [String],
    /// Excerpts for documents that matched.
    documents: Vec<JsonDocument<'a>>,
    /// Sum of match counts.
    total_matches: usize,
    /// Documents that failed.
    failures: Vec<JsonFailure<'a>>,
}

impl<'a> ExtractJson<'a> {
    /// Builds the JSON view of a report.
    pub fn new(keywords: &'a [String], report: &'a CorpusReport) -> Self {
        Self {
            keywords,
            documents: report
                .excerpts
                .iter()
                .map(|e| JsonDocument {
                    id: &e.id,
                    match_count: e.match_count(),
                    windows: &e.windows,
                    excerpt: &e.output,
                })
                .collect(),
            total_matches: report.total_matches(),
            failures: report
                .failures
                .iter()
                .map(|f| JsonFailure {
                    id: &f.id,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints each excerpt under a document header.
///
/// With `styled`, headers are colored and keyword occurrences emphasized.
pub fn print_excerpts(report: &CorpusReport, keywords: &[String], styled: bool) {
    for (i, excerpt) in report.excerpts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let details = format!(
            "({} {}, margin {})",
            excerpt.match_count(),
            plural(excerpt.match_count(), "match", "matches"),
            excerpt.margin
        );
        if styled {
            println!("{} {}", header(&excerpt.id), dim(&details));
            println!("{}", rule(RULE_WIDTH));
            print!("{}", emphasize_windows(&excerpt.output, keywords));
        } else {
            println!("{} {details}", excerpt.id);
            print!("{}", excerpt.output);
        }
    }
}

/// Emphasizes keywords in the window text, leaving the keyword line plain.
fn emphasize_windows(output: &str, keywords: &[String]) -> String {
    let keyword_line = format!("{}\n", keywords.join(KEYWORD_DELIMITER));
    match output.strip_suffix(keyword_line.as_str()) {
        Some(windows) => format!("{}{keyword_line}", emphasize(windows, keywords)),
        None => emphasize(output, keywords),
    }
}

/// Prints one stderr line per failed document.
pub fn print_failures(report: &CorpusReport, styled: bool) {
    for failure in &report.failures {
        let label = if styled {
            warning("skipped")
        } else {
            "skipped".to_string()
        };
        eprintln!("{label} {}: {}", failure.id, failure.error);
    }
}

/// One-line run summary for stderr.
pub fn summary(report: &CorpusReport) -> String {
    let mut line = format!(
        "{} {} in {} of {} {}",
        report.total_matches(),
        plural(report.total_matches(), "match", "matches"),
        report.excerpts.len(),
        report.documents,
        plural(report.documents, "document", "documents"),
    );
    if !report.failures.is_empty() {
        line.push_str(&format!(", {} failed", report.failures.len()));
    }
    line
}

/// Picks the singular or plural form.
fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Returns the first source path that writing `report` into `dir` would replace.
///
/// Covers `dir` being the source directory itself, and any excerpt target that
/// resolves to the source file or to the document it was extracted from.
pub fn overwritten_source(dir: &Path, source: &Path, report: &CorpusReport) -> Option<PathBuf> {
    let source = fs::canonicalize(source).ok()?;
    if fs::canonicalize(dir).is_ok_and(|dir| dir == source) {
        return Some(source);
    }

    report.excerpts.iter().find_map(|excerpt| {
        let target = fs::canonicalize(dir.join(&excerpt.id)).ok()?;
        let clobbers = target == source
            || (source.is_dir()
                && fs::canonicalize(source.join(&excerpt.id)).is_ok_and(|doc| doc == target));
        clobbers.then_some(target)
    })
}

/// Writes each excerpt to `dir/<id>`, creating directories as needed.
///
/// Returns the number of files written.
pub fn write_excerpt_dir(dir: &Path, report: &CorpusReport) -> io::Result<usize> {
    fs::create_dir_all(dir)?;
    for excerpt in &report.excerpts {
        let path = dir.join(&excerpt.id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &excerpt.output)?;
    }
    Ok(report.excerpts.len())
}

/// Writes each excerpt as a deflated entry named by its id.
///
/// Returns the number of entries written.
pub fn write_excerpt_zip(path: &Path, report: &CorpusReport) -> zip::result::ZipResult<usize> {
    let mut zip = ZipWriter::new(File::create(path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for excerpt in &report.excerpts {
        zip.start_file(excerpt.id.as_str(), options)?;
        zip.write_all(excerpt.output.as_bytes())?;
    }
    zip.finish()?;
    Ok(report.excerpts.len())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use snip_excerpt::{Document, ExtractOptions, Extractor};

    use super::*;

    fn report() -> CorpusReport {
        let extractor = Extractor::new(
            vec!["fox".to_string()],
            ExtractOptions {
                margin_ratio: 0.025,
                parallel: false,
            },
        )
        .unwrap();
        extractor.run(&[
            Document::new("a/quick.txt", "The quick brown fox jumps over the lazy dog"),
            Document::new("none.txt", "nothing to see"),
        ])
    }

    #[test]
    fn summary_counts_matches_and_documents() {
        assert_eq!(summary(&report()), "1 match in 1 of 2 documents");
        assert_eq!(summary(&CorpusReport::default()), "0 matches in 0 of 0 documents");
    }

    #[test]
    fn json_view_carries_windows_and_excerpt() {
        let report = report();
        let keywords = vec!["fox".to_string()];
        let json = serde_json::to_value(ExtractJson::new(&keywords, &report)).unwrap();

        assert_eq!(json["total_matches"], 1);
        assert_eq!(json["documents"][0]["id"], "a/quick.txt");
        assert_eq!(json["documents"][0]["excerpt"], " fox \n\nfox\n");
        assert_eq!(json["documents"][0]["windows"][0]["start"], 15);
        assert_eq!(json["documents"][0]["windows"][0]["end"], 20);
        assert!(json["failures"].as_array().unwrap().is_empty());
    }

    #[test]
    fn excerpt_dir_mirrors_ids() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_excerpt_dir(&dir.path().join("out"), &report()).unwrap();

        assert_eq!(written, 1);
        let contents = fs::read_to_string(dir.path().join("out/a/quick.txt")).unwrap();
        assert_eq!(contents, " fox \n\nfox\n");
        assert!(!dir.path().join("out/none.txt").exists());
    }

    #[test]
    fn overwritten_source_detects_source_dir() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir_all(docs.join("a")).unwrap();
        fs::write(docs.join("a/quick.txt"), "The quick brown fox").unwrap();
        let report = report();

        let canonical = fs::canonicalize(&docs).unwrap();

        assert_eq!(overwritten_source(&docs, &docs, &report), Some(canonical.clone()));
        assert_eq!(overwritten_source(&docs.join("."), &docs, &report), Some(canonical));
        assert_eq!(overwritten_source(&dir.path().join("out"), &docs, &report), None);
    }

    #[test]
    fn overwritten_source_detects_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("quick.txt");
        fs::write(&file, "The quick brown fox").unwrap();
        let report = Extractor::new(vec!["fox".to_string()], ExtractOptions::default())
            .unwrap()
            .run(&[Document::new("quick.txt", "The quick brown fox")]);

        assert_eq!(
            overwritten_source(dir.path(), &file, &report),
            Some(fs::canonicalize(&file).unwrap())
        );
    }

    #[test]
    fn styled_excerpt_leaves_keyword_line_plain() {
        let keywords = vec!["fox".to_string()];
        let styled = emphasize_windows(" fox \n\nfox\n", &keywords);

        assert!(styled.ends_with("\n\nfox\n"));
        assert!(styled.starts_with(&format!(" {}", emphasize("fox", &keywords))));
    }

    #[test]
    fn excerpt_zip_has_one_entry_per_excerpt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("excerpts.zip");
        assert_eq!(write_excerpt_zip(&path, &report()).unwrap(), 1);

        let mut archive = zip::ZipArchive::new(File::open(&path).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        let mut entry = archive.by_name("a/quick.txt").unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, " fox \n\nfox\n");
    }
}
