//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_index::Scope;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Fuzzy search across work items, containers and tags")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// JSON snapshot of the record collections
    pub snapshot: PathBuf,

    /// Search query (multiple words are joined with spaces)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Restrict results to one kind: all, work-item, container or tag
    #[arg(short = 's', long, default_value = "all")]
    pub scope: Scope,

    /// Maximum results per kind [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Maximum results overall [default: 50]
    #[arg(long)]
    pub total: Option<usize>,

    /// Include soft-deleted records
    #[arg(long)]
    pub deleted: bool,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `sift quick`.
#[derive(Args, Debug, Clone)]
pub struct QuickCommand {
    /// JSON snapshot of the record collections
    pub snapshot: PathBuf,

    /// Partial query as typed
    #[arg(required = true)]
    pub query: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `sift suggest`.
#[derive(Args, Debug, Clone)]
pub struct SuggestCommand {
    /// JSON snapshot of the record collections
    pub snapshot: PathBuf,

    /// Partial input to complete
    #[arg(required = true)]
    pub partial: Vec<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `sift status`.
#[derive(Args, Debug, Clone)]
pub struct StatusCommand {
    /// JSON snapshot of the record collections
    pub snapshot: PathBuf,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search every kind and print ranked results
    #[command(after_help = "\
MATCHING:
  Matching is case-insensitive and tolerates typos. A query matches wherever it
  appears in a field, and multi-word queries also match words in any order.

EXAMPLES:
  sift search data.json projct
  sift search data.json 'team meeting' --scope work-item
  sift search data.json urgent -n 5 --total 10 --json")]
    Search(SearchCommand),

    /// Run an as-you-type preview search
    Quick(QuickCommand),

    /// Suggest completions drawn from indexed field values
    Suggest(SuggestCommand),

    /// Show index statistics and validate configuration
    Status(StatusCommand),

    /// Show effective configuration settings
    Config,

    /// Initialize sift configuration in current directory
    Init(InitCommand),
}
