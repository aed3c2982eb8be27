//! Implementation of `snip extract`.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use snip_corpus::{Document, DocumentFilter, open_source};
use snip_excerpt::{ExtractOptions, Extractor};
use snip_highlight::success;
use tracing::info;

use super::shared::resolve_keywords;
use crate::cli::{
    args::ExtractCommand,
    context::CommandContext,
    output::{
        ExtractJson, overwritten_source, print_excerpts, print_failures, print_json, summary,
        write_excerpt_dir, write_excerpt_zip,
    },
};

/// Extracts excerpts from every document in the source.
pub fn run(ctx: &CommandContext, cmd: &ExtractCommand) -> ExitCode {
    let config = &ctx.config;

    let keywords = match resolve_keywords(config, &cmd.keywords) {
        Ok(keywords) => keywords,
        Err(code) => return code,
    };

    let documents = match load_documents(ctx, cmd) {
        Ok(documents) => documents,
        Err(code) => return code,
    };

    let options = ExtractOptions {
        margin_ratio: cmd.margin_ratio.unwrap_or(config.excerpt.margin_ratio),
        parallel: config.excerpt.parallel && !cmd.sequential,
    };
    let extractor = match Extractor::new(keywords, options) {
        Ok(extractor) => extractor,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        documents = documents.len(),
        keywords = extractor.keywords().len(),
        "extracting excerpts"
    );
    let report = extractor.run(&documents);

    let output = &cmd.output;
    let code = if let Some(dir) = &output.out {
        if let Some(path) = overwritten_source(dir, &ctx.cwd.join(&cmd.source), &report) {
            eprintln!("error: --out would overwrite source {}", path.display());
            eprintln!("choose an output directory outside the source");
            return ExitCode::FAILURE;
        }
        match write_excerpt_dir(dir, &report) {
            Ok(written) => {
                let message = format!("Wrote {written} excerpts to {}", dir.display());
                println!("{}", success(&message));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to write {}: {e}", dir.display());
                ExitCode::FAILURE
            }
        }
    } else if let Some(path) = &output.zip {
        match write_excerpt_zip(path, &report) {
            Ok(written) => {
                let message = format!("Wrote {written} excerpts to {}", path.display());
                println!("{}", success(&message));
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("error: failed to write {}: {e}", path.display());
                ExitCode::FAILURE
            }
        }
    } else if output.json {
        print_json(&ExtractJson::new(extractor.keywords(), &report))
    } else {
        print_excerpts(&report, extractor.keywords(), io::stdout().is_terminal());
        ExitCode::SUCCESS
    };

    print_failures(&report, io::stderr().is_terminal());
    eprintln!("{}", summary(&report));
    code
}

/// Opens the source and loads its documents using the corpus settings.
fn load_documents(ctx: &CommandContext, cmd: &ExtractCommand) -> Result<Vec<Document>, ExitCode> {
    let corpus = &ctx.config.corpus;
    let filter = DocumentFilter::new(&corpus.include, &corpus.exclude, corpus.max_document_bytes)
        .map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

    let source_path = ctx.cwd.join(&cmd.source);
    open_source(&source_path, filter)
        .and_then(|source| source.documents())
        .map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
}
