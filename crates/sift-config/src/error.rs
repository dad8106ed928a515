//! Error types for sift configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// A field table or priority list names an entity kind that does not exist.
    #[error("unknown entity kind: {name}")]
    UnknownKind {
        /// The unrecognized kind name.
        name: String,
    },

    /// An entity kind declares no searchable fields.
    #[error("no searchable fields declared for {kind}")]
    NoFields {
        /// The kind without fields.
        kind: String,
    },

    /// A searchable field has an empty key.
    #[error("empty field key declared for {kind}")]
    EmptyFieldKey {
        /// The kind declaring the field.
        kind: String,
    },

    /// The same field key is declared twice for one kind.
    #[error("field '{field}' declared more than once for {kind}")]
    DuplicateField {
        /// The kind declaring the field.
        kind: String,
        /// The repeated field key.
        field: String,
    },

    /// A field weight is not a finite number greater than zero.
    #[error("field '{field}' of {kind} has invalid weight {weight} (must be > 0)")]
    InvalidWeight {
        /// The kind declaring the field.
        kind: String,
        /// The field key.
        field: String,
        /// The rejected weight.
        weight: f32,
    },

    /// A cost threshold lies outside `(0, 1]`.
    #[error("{name} must be in (0, 1], got {value}")]
    InvalidThreshold {
        /// Name of the setting.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A length or count limit is zero or inconsistent.
    #[error("invalid {name}: {reason}")]
    InvalidLimit {
        /// Name of the setting.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The priority list does not name every kind exactly once.
    #[error("priority must list every entity kind exactly once, got [{got}]")]
    InvalidPriority {
        /// The rejected list, comma separated.
        got: String,
    },
}
