//! Configuration file parsing.
//!
//! Parses individual `.sift.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Settings section.
    pub settings: Option<RawSettings>,
    /// Field declarations: kind name -> ordered fields.
    pub fields: Option<BTreeMap<String, Vec<RawField>>>,
}

/// Raw field declaration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    /// Record attribute name.
    pub key: String,
    /// Relative importance (defaults to 1.0).
    pub weight: Option<f32>,
}

/// Raw settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Minimum query length in characters.
    pub min_query_len: Option<usize>,
    /// Maximum query length in characters.
    pub max_query_len: Option<usize>,
    /// Maximum accepted match cost.
    pub threshold: Option<f32>,
    /// Maximum accepted match cost for quick searches.
    pub quick_threshold: Option<f32>,
    /// Per-kind limit for quick searches.
    pub quick_limit: Option<usize>,
    /// Maximum suggestions.
    pub suggestion_limit: Option<usize>,
    /// Leading characters of a field value considered for matching.
    pub max_field_chars: Option<usize>,
    /// Default per-kind result limit.
    pub limit_per_kind: Option<usize>,
    /// Default overall result limit.
    pub limit_total: Option<usize>,
    /// Kind tie-break order, by name.
    pub priority: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
