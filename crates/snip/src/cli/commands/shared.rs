//! Helpers shared by several commands.

use std::process::ExitCode;

use snip_config::Config;
use snip_keywords::{
    DescriptionKeywords, KeywordAlgorithm, KeywordExtractor, KeywordFile, KeywordList, KeywordSet,
    KeywordSource,
};

use crate::cli::args::KeywordArgs;

/// Picks the CLI algorithm if given, else the configured one.
pub fn resolve_algorithm(
    config: &Config,
    cli: Option<KeywordAlgorithm>,
) -> Result<KeywordAlgorithm, ExitCode> {
    if let Some(algorithm) = cli {
        return Ok(algorithm);
    }
    config.keywords.algorithm.parse().map_err(|e| {
        eprintln!("error: invalid keywords.algorithm in configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Builds a keyword extractor from configuration and CLI overrides.
pub fn keyword_extractor(
    config: &Config,
    algorithm: Option<KeywordAlgorithm>,
) -> Result<KeywordExtractor, ExitCode> {
    let algorithm = resolve_algorithm(config, algorithm)?;
    Ok(KeywordExtractor::new(algorithm).phrase_length(config.keywords.phrase_length))
}

/// Resolves the keyword list for a run from every source the user gave.
///
/// Explicit keywords come first, then the keyword file, then keywords
/// extracted from the description.
pub fn resolve_keywords(config: &Config, args: &KeywordArgs) -> Result<Vec<String>, ExitCode> {
    let mut set = KeywordSet::new();
    if !args.keywords.is_empty() {
        set.push(KeywordList::new(args.keywords.iter().cloned()));
    }
    if let Some(path) = &args.keywords_file {
        set.push(KeywordFile::new(path));
    }
    if let Some(description) = &args.describe {
        let extractor = keyword_extractor(config, args.algorithm)?;
        let limit = args.limit.unwrap_or(config.keywords.limit);
        set.push(DescriptionKeywords::new(description.as_str(), extractor, limit));
    }

    if set.is_empty() {
        eprintln!("error: no keywords given");
        eprintln!("use -k/--keyword, --keywords-file, or --describe");
        return Err(ExitCode::FAILURE);
    }

    let keywords = set.keywords().map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })?;
    if keywords.is_empty() {
        eprintln!("error: no keywords resolved from the given sources");
        return Err(ExitCode::FAILURE);
    }
    Ok(keywords)
}
