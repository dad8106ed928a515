//! Implementation of `sift config`.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use sift_highlight::{Highlighter, Language};

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let highlighter = Highlighter::for_terminal(io::stdout().is_terminal());
    let settings = ctx.config.settings_to_toml();
    print!("{}", highlighter.paint(&settings, Language::Toml));
    ExitCode::SUCCESS
}
