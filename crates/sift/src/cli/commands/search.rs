//! Implementation of `sift search`.

use std::process::ExitCode;

use sift_index::SearchRequest;
use tracing::debug;

use crate::cli::{args::SearchCommand, context::CommandContext, output::output_results};

/// Searches the snapshot and prints ranked results.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let (engine, _) = match ctx.engine(&cmd.snapshot) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let mut request = SearchRequest::new(query.as_str())
        .with_scope(cmd.scope)
        .with_soft_deleted(cmd.deleted);
    if let Some(limit) = cmd.limit {
        request = request.with_limit_per_kind(limit);
    }
    if let Some(total) = cmd.total {
        request = request.with_limit_total(total);
    }

    if let Err(e) = engine.validate(&request) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match engine.search(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(total = result.total, "search complete");

    output_results(&engine, &query, &result, &cmd.output)
}
