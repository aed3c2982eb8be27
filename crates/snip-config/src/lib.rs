//! Configuration system for snip.
//!
//! snip uses TOML configuration files named `.snip.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.snip.toml` files
//! found, then loading `~/.snip.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawExcerptSettings, RawKeywordSettings, parse_config_file,
    parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};

/// Default include pattern for corpus documents.
pub const DEFAULT_INCLUDE_PATTERN: &str = "**/*.txt";

/// Top-level merged configuration for snip.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Excerpt extraction settings.
    pub excerpt: ExcerptSettings,
    /// Document source settings.
    pub corpus: CorpusSettings,
    /// Keyword extraction settings.
    pub keywords: KeywordSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.snip.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Checks that the settings are usable, e.g. after CLI overrides were applied.
    pub fn validate(&self) -> Result<(), ConfigError> {
        merge::validate(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.snip.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            excerpt: &self.excerpt,
            corpus: &self.corpus,
            keywords: &self.keywords,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Settings for excerpt extraction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExcerptSettings {
    /// Margin as a fraction of document length in chars.
    pub margin_ratio: f64,
    /// Process documents in parallel.
    pub parallel: bool,
}

impl Default for ExcerptSettings {
    fn default() -> Self {
        Self {
            margin_ratio: 0.025,
            parallel: true,
        }
    }
}

/// Settings for document discovery.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Include glob patterns, matched against document ids.
    pub include: Vec<String>,
    /// Exclude glob patterns, matched against document ids.
    pub exclude: Vec<String>,
    /// Documents larger than this many bytes are skipped.
    pub max_document_bytes: u64,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            include: vec![DEFAULT_INCLUDE_PATTERN.to_string()],
            exclude: Vec::new(),
            max_document_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Settings for keyword extraction from a description.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeywordSettings {
    /// Extraction algorithm: `textrank`, `rake`, or `yake`.
    pub algorithm: String,
    /// Maximum number of keywords taken from an extraction.
    pub limit: usize,
    /// Maximum words per extracted phrase.
    pub phrase_length: usize,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            algorithm: String::from("textrank"),
            limit: 10,
            phrase_length: 3,
        }
    }
}

/// Borrowed view of the settings for TOML serialization.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Excerpt extraction settings.
    excerpt: &'a ExcerptSettings,
    /// Document source settings.
    corpus: &'a CorpusSettings,
    /// Keyword extraction settings.
    keywords: &'a KeywordSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_defaults() {
        let excerpt = ExcerptSettings::default();
        assert!((excerpt.margin_ratio - 0.025).abs() < f64::EPSILON);
        assert!(excerpt.parallel);
    }

    #[test]
    fn test_corpus_defaults() {
        let corpus = CorpusSettings::default();
        assert_eq!(corpus.include, vec!["**/*.txt"]);
        assert!(corpus.exclude.is_empty());
        assert_eq!(corpus.max_document_bytes, 10_485_760);
    }

    #[test]
    fn test_keyword_defaults() {
        let keywords = KeywordSettings::default();
        assert_eq!(keywords.algorithm, "textrank");
        assert_eq!(keywords.limit, 10);
        assert_eq!(keywords.phrase_length, 3);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_settings_to_toml() {
        let toml = Config::default().settings_to_toml().unwrap();

        assert!(toml.contains("[excerpt]"));
        assert!(toml.contains("[corpus]"));
        assert!(toml.contains("[keywords]"));
        assert!(toml.contains("margin_ratio = 0.025"));
        assert!(toml.contains("algorithm = \"textrank\""));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("excerpt").is_some());
        assert!(parsed.get("corpus").is_some());
        assert!(parsed.get("keywords").is_some());
    }
}
