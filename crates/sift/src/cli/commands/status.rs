//! Implementation of `sift status`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use sift_config::{ConfigScope, ConfigWarning, EntityKind, discover_config_sources};
use sift_index::{INDEX_VERSION, fingerprint_string};

use crate::cli::{
    args::StatusCommand,
    context::CommandContext,
    output::{dim, kind_label, subheader, warning},
};

/// Shows configuration files, index statistics per kind, and validation warnings.
pub fn run(ctx: &CommandContext, cmd: &StatusCommand) -> ExitCode {
    let (engine, snapshot) = match ctx.engine(&cmd.snapshot) {
        Ok(loaded) => loaded,
        Err(code) => return code,
    };

    println!("{}", subheader("Config files:"));
    let sources = discover_config_sources(&ctx.cwd);
    if sources.is_empty() {
        println!("   {}", dim("(none, using defaults)"));
    }
    for source in &sources {
        let scope = match source.scope {
            ConfigScope::Local => "local",
            ConfigScope::Global => "global",
        };
        println!("   {} {}", source.path.display(), dim(&format!("({scope})")));
    }
    println!();

    let index = engine.index();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Kind",
        "Records",
        "Indexed",
        "Deleted",
        "Fields",
        "Fingerprint",
    ]);
    for kind in EntityKind::ALL {
        let search_index = index.get(kind);
        let deleted = search_index.entries().iter().filter(|e| e.deleted).count();
        let fields = engine
            .config()
            .fields(kind)
            .iter()
            .map(|f| format!("{} ({})", f.key, f.weight))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            Cell::new(kind_label(kind)),
            Cell::new(snapshot.records(kind).len().to_string()),
            Cell::new(search_index.len().to_string()),
            Cell::new(deleted.to_string()),
            Cell::new(fields),
            Cell::new(fingerprint_string(search_index.fingerprint())),
        ]);
    }
    println!("{}", subheader(&format!("Index (version {INDEX_VERSION}):")));
    println!("{table}");
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::QuickThresholdStricter { .. } => {
                println!(
                    "{}",
                    dim("Hint: quick_threshold is usually looser (higher) than threshold")
                );
            }
            ConfigWarning::TotalBelowPerKind { .. } => {
                println!("{}", dim("Hint: raise limit_total or lower limit_per_kind"));
            }
            ConfigWarning::WeightBelowOne { .. } => {
                println!(
                    "{}",
                    dim("Hint: a weight of 1 or more keeps every match the threshold allows")
                );
            }
            _ => {}
        }
    }
}
