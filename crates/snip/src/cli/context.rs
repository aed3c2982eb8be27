//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use snip_config::Config;

/// Working directory and settings resolved once per invocation.
pub struct CommandContext {
    /// Directory the command was run from.
    pub cwd: PathBuf,
    /// Merged `.snip.toml` settings, or defaults.
    pub config: Config,
}

impl CommandContext {
    /// Resolves the working directory and, if `load_config` is set, the merged config.
    ///
    /// `init` passes `false` so it can replace a `.snip.toml` that no longer parses.
    pub fn resolve(load_config: bool) -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;

        let config = if load_config {
            Config::load(&cwd).map_err(|e| {
                eprintln!("error: failed to load configuration: {e}");
                ExitCode::FAILURE
            })?
        } else {
            Config::default()
        };

        Ok(Self { cwd, config })
    }
}
