//! sift: fuzzy search across work items, containers and tags.
//!
//! The `sift` binary hosts the search engine. It loads a JSON snapshot of the three record
//! collections, builds an index using the configuration discovered from the current
//! directory, and prints ranked, highlighted results.

#![warn(missing_docs)]

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SIFT_LOG";

/// Log filter used when `SIFT_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    // `init` must work even when an existing config file is broken.
    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    debug!(cwd = %ctx.cwd.display(), "context loaded");

    commands::run(cli.command, &ctx)
}

/// Installs a stderr log subscriber filtered by `SIFT_LOG`.
fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
