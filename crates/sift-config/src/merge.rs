//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`, applying
//! precedence rules and resolving kind names.

use std::{collections::BTreeMap, path::PathBuf};

use crate::{
    Config, ConfigError, EntityKind, FieldSet, SearchableField, Settings,
    parse::{RawConfig, RawField, RawSettings},
};

/// Weight given to fields declared without one.
const DEFAULT_FIELD_WEIGHT: f32 = 1.0;

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Fields: merged by kind, first declaration wins completely
/// - Kinds never declared anywhere keep their default fields
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs)?;
    let fields = merge_fields(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent())
        .map(|p| p.to_path_buf());

    Ok(Config {
        settings,
        fields,
        config_root,
    })
}

/// Merges settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Result<Settings, ConfigError> {
    let mut result = Settings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings)?;
        }
    }

    Ok(result)
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) -> Result<(), ConfigError> {
    if let Some(v) = raw.min_query_len {
        result.min_query_len = v;
    }
    if let Some(v) = raw.max_query_len {
        result.max_query_len = v;
    }
    if let Some(v) = raw.threshold {
        result.threshold = v;
    }
    if let Some(v) = raw.quick_threshold {
        result.quick_threshold = v;
    }
    if let Some(v) = raw.quick_limit {
        result.quick_limit = v;
    }
    if let Some(v) = raw.suggestion_limit {
        result.suggestion_limit = v;
    }
    if let Some(v) = raw.max_field_chars {
        result.max_field_chars = v;
    }
    if let Some(v) = raw.limit_per_kind {
        result.limit_per_kind = v;
    }
    if let Some(v) = raw.limit_total {
        result.limit_total = v;
    }
    if let Some(ref names) = raw.priority {
        result.priority = names
            .iter()
            .map(|name| name.parse::<EntityKind>())
            .collect::<Result<Vec<_>, _>>()?;
    }
    Ok(())
}

/// Merges field declarations from all configs.
///
/// Kinds are merged by name - first declaration wins completely.
fn merge_fields(
    configs: &[ParsedConfig],
) -> Result<BTreeMap<EntityKind, FieldSet>, ConfigError> {
    let mut result = Config::default().fields;
    let mut declared: Vec<EntityKind> = Vec::new();

    // Iterate in precedence order (highest first) - first declaration wins
    for parsed in configs {
        let Some(ref fields) = parsed.config.fields else {
            continue;
        };

        for (name, raw_fields) in fields {
            let kind: EntityKind = name.parse()?;
            if declared.contains(&kind) {
                // Already declared by higher-precedence config
                continue;
            }
            declared.push(kind);
            result.insert(kind, convert_fields(raw_fields));
        }
    }

    Ok(result)
}

/// Converts raw field declarations, applying the default weight.
fn convert_fields(raw: &[RawField]) -> FieldSet {
    FieldSet::new(
        raw.iter()
            .map(|f| SearchableField::new(f.key.clone(), f.weight.unwrap_or(DEFAULT_FIELD_WEIGHT)))
            .collect(),
    )
}
