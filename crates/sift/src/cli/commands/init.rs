//! Implementation of `sift init`.

use std::{
    fs,
    io::{self, IsTerminal},
    process::ExitCode,
};

use sift_config::{CONFIG_FILENAME, local_template};
use sift_highlight::{Highlighter, Language};

use crate::cli::{args::InitCommand, context::CommandContext, output::subheader};

/// Initializes a `.sift.toml` configuration file in the current directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let config_path = ctx.cwd.join(CONFIG_FILENAME);

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = local_template();
    if let Err(e) = fs::write(&config_path, &template) {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", config_path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    let highlighter = Highlighter::for_terminal(io::stdout().is_terminal());
    print!("{}", highlighter.paint(&template, Language::Toml));

    ExitCode::SUCCESS
}
