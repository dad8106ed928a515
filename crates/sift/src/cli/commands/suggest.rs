//! Implementation of `sift suggest`.

use std::process::ExitCode;

use crate::cli::{args::SuggestCommand, context::CommandContext, output::output_suggestions};

/// Prints completions for a partial input.
pub fn run(ctx: &CommandContext, cmd: &SuggestCommand) -> ExitCode {
    let (engine, _) = match ctx.engine(&cmd.snapshot) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let partial = cmd.partial.join(" ");
    let suggestions = engine.suggestions(&partial);
    output_suggestions(&partial, &suggestions, &cmd.output)
}
