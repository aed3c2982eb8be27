//! Implementation of `snip config`.

use std::process::ExitCode;

use snip_config::discover_config_files;
use snip_highlight::{Highlighter, dim};

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let files = discover_config_files(&ctx.cwd);
    if files.is_empty() {
        println!("{}", dim("# no config files found, showing defaults"));
    } else {
        for path in &files {
            println!("{}", dim(&format!("# {}", path.display())));
        }
    }

    print!("{}", Highlighter::new().highlight_toml(&toml));
    ExitCode::SUCCESS
}
