//! Configuration system for sift.
//!
//! sift reads optional TOML files named `.sift.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.sift.toml` files
//! found, then loading `~/.sift.toml` as the global config with lowest precedence.
//!
//! A loaded [`Config`] is turned into an [`EngineConfig`] exactly once, when the engine is
//! initialized. That conversion is where every setting and field declaration is validated;
//! searches never re-interpret configuration.

#![warn(missing_docs)]

mod discovery;
mod error;
mod fields;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use discovery::{
    CONFIG_FILENAME, ConfigScope, ConfigSource, discover_config_files, discover_config_sources,
    global_config_path,
};
pub use error::ConfigError;
pub use fields::{EntityKind, FieldSet, SearchableField, default_fields};
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{RawConfig, RawField, RawSettings, parse_config_file, parse_config_str};
use serde::{Deserialize, Serialize};
pub use templates::local_template;
pub use validate::ConfigWarning;
use validate::{validate_engine, validate_config};

/// Default maximum acceptable match cost.
pub const DEFAULT_THRESHOLD: f32 = 0.4;

/// Default match cost accepted by quick (as-you-type) searches.
pub const DEFAULT_QUICK_THRESHOLD: f32 = 0.5;

/// Top-level merged configuration for sift.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.sift.toml` files according to precedence rules. It is not yet validated; call
/// [`Config::engine_config`] to obtain the checked form the engine runs on.
#[derive(Debug, Clone)]
pub struct Config {
    /// Matching and limit settings.
    pub settings: Settings,
    /// Searchable fields per entity kind.
    pub fields: BTreeMap<EntityKind, FieldSet>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            fields: EntityKind::ALL
                .into_iter()
                .map(|kind| (kind, default_fields(kind)))
                .collect(),
            config_root: None,
        }
    }
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.sift.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and produces the engine's immutable settings.
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        EngineConfig::new(self.settings.clone(), self.fields.clone())
    }

    /// Returns non-fatal warnings about the configuration.
    ///
    /// Hard errors are reported by [`Config::engine_config`] instead.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings and fields to TOML format.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            settings: self.settings.clone(),
            fields: self
                .fields
                .iter()
                .map(|(kind, fields)| (kind.to_string(), fields.as_slice().to_vec()))
                .collect(),
        };
        toml::to_string_pretty(&serializable).unwrap_or_else(|e| format!("# {e}\n"))
    }
}

/// Matching thresholds and result limits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Queries shorter than this many characters are not searched.
    pub min_query_len: usize,
    /// Queries are truncated to this many characters.
    pub max_query_len: usize,
    /// Maximum match cost (0 = perfect, 1 = unrelated) a field may have to count.
    pub threshold: f32,
    /// Looser cost threshold used by quick searches.
    pub quick_threshold: f32,
    /// Per-kind result limit used by quick searches.
    pub quick_limit: usize,
    /// Maximum number of suggestions returned.
    pub suggestion_limit: usize,
    /// Field values are only matched on this many leading characters.
    pub max_field_chars: usize,
    /// Default per-kind result limit for requests that do not set one.
    pub limit_per_kind: usize,
    /// Default overall result limit for requests that do not set one.
    pub limit_total: usize,
    /// Kind order used to break score ties.
    pub priority: Vec<EntityKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_query_len: 256,
            threshold: DEFAULT_THRESHOLD,
            quick_threshold: DEFAULT_QUICK_THRESHOLD,
            quick_limit: 5,
            suggestion_limit: 10,
            max_field_chars: 4096,
            limit_per_kind: 20,
            limit_total: 50,
            priority: EntityKind::ALL.to_vec(),
        }
    }
}

/// Validated, immutable engine configuration.
///
/// Construction checks every invariant the engine relies on (positive weights, unique field
/// keys, thresholds in range, a complete priority list), so holders can use it without
/// further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Validated settings.
    settings: Settings,
    /// Validated fields for every kind.
    fields: BTreeMap<EntityKind, FieldSet>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let config = Config::default();
        Self {
            settings: config.settings,
            fields: config.fields,
        }
    }
}

impl EngineConfig {
    /// Validates settings and fields, returning the first violation found.
    pub fn new(
        settings: Settings,
        fields: BTreeMap<EntityKind, FieldSet>,
    ) -> Result<Self, ConfigError> {
        validate_engine(&settings, &fields)?;
        Ok(Self { settings, fields })
    }

    /// Replaces the fields of one kind, re-validating the result.
    pub fn with_fields(mut self, kind: EntityKind, fields: FieldSet) -> Result<Self, ConfigError> {
        self.fields.insert(kind, fields);
        validate_engine(&self.settings, &self.fields)?;
        Ok(self)
    }

    /// Replaces the settings, re-validating the result.
    pub fn with_settings(mut self, settings: Settings) -> Result<Self, ConfigError> {
        validate_engine(&settings, &self.fields)?;
        self.settings = settings;
        Ok(self)
    }

    /// Returns the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the searchable fields of a kind.
    pub fn fields(&self, kind: EntityKind) -> &FieldSet {
        // Validation guarantees an entry for every kind.
        self.fields.get(&kind).unwrap_or(&fields::EMPTY_FIELDS)
    }

    /// Returns the tie-break rank of a kind (lower ranks first).
    pub fn priority_of(&self, kind: EntityKind) -> usize {
        self.settings
            .priority
            .iter()
            .position(|k| *k == kind)
            .unwrap_or(usize::MAX)
    }

    /// Returns the kinds in priority order.
    pub fn priority(&self) -> &[EntityKind] {
        &self.settings.priority
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig {
    /// Matching and limit settings.
    settings: Settings,
    /// Fields keyed by kind name (sorted for deterministic output).
    fields: BTreeMap<String, Vec<SearchableField>>,
}
