//! Command implementations and dispatch.

pub mod config;
pub mod extract;
pub mod init;
pub mod keywords;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Extract(cmd) => extract::run(ctx, &cmd),
        Commands::Keywords(cmd) => keywords::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
