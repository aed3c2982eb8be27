//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and validating the result.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    Config, ConfigError, CorpusSettings, ExcerptSettings, KeywordSettings,
    parse::{RawConfig, RawCorpusSettings, RawExcerptSettings, RawKeywordSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Pattern lists (`include`, `exclude`): first defined list wins as a whole
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let mut excerpt = ExcerptSettings::default();
    let mut corpus = CorpusSettings::default();
    let mut keywords = KeywordSettings::default();

    // Lowest precedence first so closer files overwrite.
    for parsed in configs.iter().rev() {
        debug!(path = %parsed.path.display(), "merging config");
        if let Some(ref raw) = parsed.config.excerpt {
            apply_raw_excerpt(&mut excerpt, raw);
        }
        if let Some(ref raw) = parsed.config.corpus {
            apply_raw_corpus(&mut corpus, raw);
        }
        if let Some(ref raw) = parsed.config.keywords {
            apply_raw_keywords(&mut keywords, raw);
        }
    }

    let config = Config {
        excerpt,
        corpus,
        keywords,
        config_root: configs
            .first()
            .and_then(|c| c.path.parent())
            .map(PathBuf::from),
    };
    validate(&config)?;

    Ok(config)
}

/// Applies raw excerpt settings to result, overwriting any present values.
fn apply_raw_excerpt(result: &mut ExcerptSettings, raw: &RawExcerptSettings) {
    if let Some(v) = raw.margin_ratio {
        result.margin_ratio = v;
    }
    if let Some(v) = raw.parallel {
        result.parallel = v;
    }
}

/// Applies raw corpus settings to result.
fn apply_raw_corpus(result: &mut CorpusSettings, raw: &RawCorpusSettings) {
    if let Some(ref v) = raw.include {
        result.include.clone_from(v);
    }
    if let Some(ref v) = raw.exclude {
        result.exclude.clone_from(v);
    }
    if let Some(v) = raw.max_document_bytes {
        result.max_document_bytes = v;
    }
}

/// Applies raw keyword settings to result.
fn apply_raw_keywords(result: &mut KeywordSettings, raw: &RawKeywordSettings) {
    if let Some(ref v) = raw.algorithm {
        result.algorithm.clone_from(v);
    }
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.phrase_length {
        result.phrase_length = v;
    }
}

/// Rejects merged settings that cannot drive an extraction run.
pub(crate) fn validate(config: &Config) -> Result<(), ConfigError> {
    let ratio = config.excerpt.margin_ratio;
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return Err(ConfigError::InvalidValue {
            key: "excerpt.margin_ratio",
            message: format!("expected a value between 0 and 1, got {ratio}"),
        });
    }
    if config.corpus.include.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "corpus.include",
            message: "at least one include pattern is required".to_string(),
        });
    }
    if config.corpus.max_document_bytes == 0 {
        return Err(ConfigError::InvalidValue {
            key: "corpus.max_document_bytes",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.keywords.limit == 0 {
        return Err(ConfigError::InvalidValue {
            key: "keywords.limit",
            message: "must be greater than zero".to_string(),
        });
    }
    if config.keywords.phrase_length == 0 {
        return Err(ConfigError::InvalidValue {
            key: "keywords.phrase_length",
            message: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    /// Parses TOML into a `ParsedConfig` rooted at `path`.
    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(toml, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn merge_empty_returns_default() {
        let config = merge_configs(&[]).unwrap();
        assert!(config.config_root.is_none());
        assert_eq!(config.keywords.limit, 10);
    }

    #[test]
    fn merge_closest_scalar_wins() {
        let configs = vec![
            parsed("/project/.snip.toml", "[excerpt]\nmargin_ratio = 0.1\n"),
            parsed(
                "/home/.snip.toml",
                "[excerpt]\nmargin_ratio = 0.5\nparallel = false\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();

        assert!((config.excerpt.margin_ratio - 0.1).abs() < f64::EPSILON);
        assert!(!config.excerpt.parallel);
        assert_eq!(config.config_root, Some(PathBuf::from("/project")));
    }

    #[test]
    fn merge_pattern_lists_replace_whole() {
        let configs = vec![
            parsed("/project/.snip.toml", "[corpus]\ninclude = \"**/*.md\"\n"),
            parsed(
                "/home/.snip.toml",
                "[corpus]\ninclude = [\"**/*.txt\", \"**/*.log\"]\nexclude = \"tmp/**\"\n",
            ),
        ];
        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.corpus.include, vec!["**/*.md"]);
        assert_eq!(config.corpus.exclude, vec!["tmp/**"]);
    }

    #[test]
    fn merge_keyword_settings() {
        let configs = vec![parsed(
            "/p/.snip.toml",
            "[keywords]\nalgorithm = \"yake\"\nlimit = 3\n",
        )];
        let config = merge_configs(&configs).unwrap();

        assert_eq!(config.keywords.algorithm, "yake");
        assert_eq!(config.keywords.limit, 3);
        assert_eq!(config.keywords.phrase_length, 3);
    }

    #[test]
    fn merge_rejects_out_of_range_ratio() {
        let configs = vec![parsed("/p/.snip.toml", "[excerpt]\nmargin_ratio = 1.5\n")];
        let err = merge_configs(&configs).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "excerpt.margin_ratio",
                ..
            }
        ));
    }

    #[test]
    fn merge_rejects_zero_limit() {
        let configs = vec![parsed("/p/.snip.toml", "[keywords]\nlimit = 0\n")];
        assert!(merge_configs(&configs).is_err());
    }

    #[test]
    fn merge_rejects_empty_include() {
        let configs = vec![parsed("/p/.snip.toml", "[corpus]\ninclude = []\n")];
        assert!(merge_configs(&configs).is_err());
    }
}
