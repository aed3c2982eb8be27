//! Implementation of `snip keywords`.

use std::{fs, process::ExitCode};

use snip_highlight::dim;
use snip_keywords::ScoredKeyword;

use super::shared::keyword_extractor;
use crate::cli::{args::KeywordsCommand, context::CommandContext, output::print_json};

/// Prints keywords extracted from text, most relevant first.
pub fn run(ctx: &CommandContext, cmd: &KeywordsCommand) -> ExitCode {
    let text = match read_text(ctx, cmd) {
        Ok(text) => text,
        Err(code) => return code,
    };
    if text.trim().is_empty() {
        eprintln!("error: no text to extract keywords from");
        return ExitCode::FAILURE;
    }

    let extractor = match keyword_extractor(&ctx.config, cmd.algorithm) {
        Ok(extractor) => extractor,
        Err(code) => return code,
    };
    let limit = cmd.limit.unwrap_or(ctx.config.keywords.limit);
    let keywords: Vec<ScoredKeyword> = extractor.extract(&text).into_iter().take(limit).collect();

    if cmd.json {
        return print_json(&keywords);
    }

    let algorithm = extractor.algorithm();
    println!("{}", dim(&format!("# {algorithm}: {}", algorithm.description())));
    if keywords.is_empty() {
        println!("{}", dim("(no keywords found)"));
        return ExitCode::SUCCESS;
    }
    for keyword in &keywords {
        println!("{:>10.4}  {}", keyword.score, keyword.term);
    }
    ExitCode::SUCCESS
}

/// Returns the positional text, or the contents of `--file`.
fn read_text(ctx: &CommandContext, cmd: &KeywordsCommand) -> Result<String, ExitCode> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    let Some(path) = &cmd.file else {
        eprintln!("error: no text given");
        return Err(ExitCode::FAILURE);
    };
    let path = ctx.cwd.join(path);
    fs::read_to_string(&path).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", path.display());
        ExitCode::FAILURE
    })
}
