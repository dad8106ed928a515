//! Implementation of `sift quick`.

use std::process::ExitCode;

use crate::cli::{args::QuickCommand, context::CommandContext, output::output_results};

/// Runs an as-you-type preview search.
///
/// Input too short to search is not an error; it simply finds nothing.
pub fn run(ctx: &CommandContext, cmd: &QuickCommand) -> ExitCode {
    let (engine, _) = match ctx.engine(&cmd.snapshot) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let result = engine.quick_search(&query);
    output_results(&engine, &query, &result, &cmd.output)
}
