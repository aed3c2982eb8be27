//! Command-line interface for the `snip` excerpt extractor.

use std::{env, io, process::ExitCode};

use clap::Parser;
use snip::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "SNIP_LOG";

/// Installs a stderr subscriber filtered by `SNIP_LOG` or the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(directives) = env::var(LOG_ENV) {
        EnvFilter::new(directives)
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let load_config = !matches!(cli.command, Commands::Init(_));
    let ctx = match CommandContext::resolve(load_config) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
