//! Clap argument definitions for the `snip` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use snip_keywords::{KeywordAlgorithm, KeywordError};

/// Parse a keyword extraction algorithm from a string.
fn parse_algorithm(s: &str) -> Result<KeywordAlgorithm, String> {
    s.parse().map_err(|e: KeywordError| e.to_string())
}

/// Parse a margin ratio, accepting the same `[0, 1]` range as `.snip.toml`.
fn parse_margin_ratio(s: &str) -> Result<f64, String> {
    let ratio: f64 = s.parse().map_err(|e| format!("invalid number: {e}"))?;
    if ratio.is_finite() && (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("expected a value between 0 and 1, got {ratio}"))
    }
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "snip")]
#[command(about = "Extract keyword excerpts from document collections")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where extraction keywords come from. Sources combine in the order listed.
#[derive(Args, Debug, Clone, Default)]
pub struct KeywordArgs {
    /// Keyword to search for (repeatable)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// File of keywords, one per line or comma-separated
    #[arg(long)]
    pub keywords_file: Option<PathBuf>,

    /// Describe what to look for; keywords are extracted from the text
    #[arg(long)]
    pub describe: Option<String>,

    /// Algorithm for --describe: textrank, rake, yake [default: textrank]
    #[arg(short = 'a', long, value_parser = parse_algorithm)]
    pub algorithm: Option<KeywordAlgorithm>,

    /// Maximum keywords taken from --describe [default: 10]
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Where extraction results go.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractOutputArgs {
    /// Write one excerpt file per matching document into this directory
    #[arg(long, conflicts_with_all = ["zip", "json"])]
    pub out: Option<PathBuf>,

    /// Write excerpts into a zip archive, one entry per matching document
    #[arg(long, conflicts_with = "json")]
    pub zip: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `snip extract`.
#[derive(Args, Debug, Clone)]
pub struct ExtractCommand {
    /// Directory, zip archive, or file to extract from
    pub source: PathBuf,

    #[command(flatten)]
    /// Keyword sources.
    pub keywords: KeywordArgs,

    /// Margin as a fraction of each document's length [default: 0.025]
    #[arg(long, value_parser = parse_margin_ratio)]
    pub margin_ratio: Option<f64>,

    #[command(flatten)]
    /// Output destination flags.
    pub output: ExtractOutputArgs,

    /// Process documents one at a time
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for `snip keywords`.
#[derive(Args, Debug, Clone)]
pub struct KeywordsCommand {
    /// Text to extract keywords from
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Keyword extraction algorithm: textrank, rake, yake [default: textrank]
    #[arg(short = 'a', long, value_parser = parse_algorithm)]
    pub algorithm: Option<KeywordAlgorithm>,

    /// Maximum keywords to display [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `snip init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.snip.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `snip` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract keyword excerpts from a corpus
    #[command(after_help = "\
EXAMPLES:
  snip extract docs/ -k merger -k acquisition
  snip extract upload.zip --keywords-file keywords.csv --zip excerpts.zip
  snip extract notes.txt --describe 'late invoices from suppliers' --json")]
    Extract(ExtractCommand),

    /// Extract ranked keywords from text
    Keywords(KeywordsCommand),

    /// Initialize snip configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use snip_excerpt::DEFAULT_MARGIN_RATIO;

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn margin_ratio_help_matches_default() {
        let help = get_arg_help(&Cli::command(), "extract", "margin_ratio");
        assert!(
            help.contains(&format!("[default: {DEFAULT_MARGIN_RATIO}]")),
            "extract --margin-ratio help should contain default {DEFAULT_MARGIN_RATIO}: {help}"
        );
    }

    #[test]
    fn extract_collects_repeated_keywords() {
        let cli = Cli::try_parse_from(["snip", "extract", "docs", "-k", "fox", "-k", "dog"])
            .unwrap();
        let Commands::Extract(cmd) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(cmd.keywords.keywords, vec!["fox", "dog"]);
        assert_eq!(cmd.source, PathBuf::from("docs"));
        assert!(!cmd.sequential);
    }

    #[test]
    fn out_and_zip_conflict() {
        let result = Cli::try_parse_from([
            "snip", "extract", "docs", "-k", "fox", "--out", "a", "--zip", "b.zip",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn margin_ratio_must_be_within_unit_range() {
        for ratio in ["2", "1e30", "-0.5", "NaN", "inf", "wide"] {
            let flag = format!("--margin-ratio={ratio}");
            let result = Cli::try_parse_from(["snip", "extract", "docs", "-k", "fox", flag.as_str()]);
            assert!(result.is_err(), "accepted --margin-ratio {ratio}");
        }

        let cli = Cli::try_parse_from([
            "snip",
            "extract",
            "docs",
            "-k",
            "fox",
            "--margin-ratio",
            "1",
        ])
        .unwrap();
        let Commands::Extract(cmd) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(cmd.margin_ratio, Some(1.0));
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let result = Cli::try_parse_from(["snip", "keywords", "text", "-a", "tfidf"]);
        assert!(result.is_err());
    }

    #[test]
    fn keywords_requires_text_or_file() {
        assert!(Cli::try_parse_from(["snip", "keywords"]).is_err());
        assert!(Cli::try_parse_from(["snip", "keywords", "--file", "notes.txt"]).is_ok());
    }
}
