//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use serde::Serialize;
pub use sift_highlight::{dim, header, subheader, warning};
use sift_config::{EntityKind, FieldSet};
use sift_highlight::{Highlighter, Language, highlight_matches};
use sift_index::{AggregatedResult, Engine, IndexEntry, ScoredResult};

use crate::cli::args::OutputArgs;

/// JSON output for `sift search` and `sift quick`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Ranked results.
    #[serde(flatten)]
    result: &'a AggregatedResult,
}

/// JSON output for `sift suggest`.
#[derive(Serialize)]
struct JsonSuggestOutput<'a> {
    /// The partial input as given.
    query: &'a str,
    /// Suggested values, best first.
    suggestions: &'a [String],
}

/// Human-readable plural name of a kind.
pub fn kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::WorkItem => "Work items",
        EntityKind::Container => "Containers",
        EntityKind::Tag => "Tags",
    }
}

/// Prints a value as pretty JSON, highlighted when stdout is a terminal.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    let json = match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            return ExitCode::FAILURE;
        }
    };
    let highlighter = Highlighter::for_terminal(io::stdout().is_terminal());
    println!("{}", highlighter.paint(&json, Language::Json));
    ExitCode::SUCCESS
}

/// Outputs search results grouped by kind in priority order.
pub fn output_results(
    engine: &Engine,
    query: &str,
    result: &AggregatedResult,
    output: &OutputArgs,
) -> ExitCode {
    if output.json {
        return print_json(&JsonSearchOutput { query, result });
    }

    if result.is_empty() {
        println!("{}", dim("No results found."));
        return ExitCode::SUCCESS;
    }

    let index = engine.index();
    for &kind in engine.config().priority() {
        let results = result.kind(kind);
        if results.is_empty() {
            continue;
        }
        println!(
            "{}",
            header(&format!("{} ({})", kind_label(kind), results.len()))
        );
        let fields = engine.config().fields(kind);
        for scored in results {
            if let Some(entry) = index.get(kind).get(&scored.id) {
                print!("{}", format_result(entry, scored, fields));
            }
        }
        println!();
    }

    let noun = if result.total == 1 { "result" } else { "results" };
    println!("{}", dim(&format!("─── {} {noun} ───", result.total)));
    ExitCode::SUCCESS
}

/// Outputs suggestions one per line.
pub fn output_suggestions(query: &str, suggestions: &[String], output: &OutputArgs) -> ExitCode {
    if output.json {
        return print_json(&JsonSuggestOutput { query, suggestions });
    }
    if suggestions.is_empty() {
        println!("{}", dim("No suggestions."));
    }
    for suggestion in suggestions {
        println!("{suggestion}");
    }
    ExitCode::SUCCESS
}

/// Formats one result: the first declared field as a title line, then every other field
/// that matched.
fn format_result(entry: &IndexEntry, scored: &ScoredResult, fields: &FieldSet) -> String {
    let mut lines = Vec::new();
    let mut title_done = false;

    for field in fields {
        let Some(raw) = entry.raw_value(&field.key) else {
            continue;
        };
        let spans = scored.spans_for(&field.key);
        if !title_done {
            let mut title = format!("  {}  {}", dim(&entry.id), highlight_matches(raw, spans));
            if entry.deleted {
                title.push_str(&format!(" {}", warning("[deleted]")));
            }
            title.push_str(&format!("  {}", dim(&format!("{:.3}", scored.score))));
            lines.push(title);
            title_done = true;
        } else if !spans.is_empty() {
            lines.push(format!(
                "      {} {}",
                dim(&format!("{}:", field.key)),
                highlight_matches(raw, spans)
            ));
        }
    }

    if !title_done {
        lines.push(format!("  {}", dim(&entry.id)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
