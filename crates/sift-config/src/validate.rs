//! Configuration validation.
//!
//! Hard violations (anything the engine cannot run with) are reported as [`ConfigError`]
//! by [`validate_engine`]. Settings that are legal but probably unintended are reported as
//! [`ConfigWarning`]s.

use std::{collections::BTreeMap, collections::HashSet, fmt};

use crate::{Config, ConfigError, EntityKind, FieldSet, Settings};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The quick-search threshold is stricter than the regular one.
    QuickThresholdStricter {
        /// Regular threshold.
        threshold: f32,
        /// Quick-search threshold.
        quick_threshold: f32,
    },
    /// The overall limit can never be reached because it is below the per-kind limit.
    TotalBelowPerKind {
        /// Default per-kind limit.
        limit_per_kind: usize,
        /// Default overall limit.
        limit_total: usize,
    },
    /// A single-character minimum query makes nearly every record match.
    VeryShortMinimumQuery,
    /// A field weight below 1 drops every match on that field whose cost reaches the weight.
    WeightBelowOne {
        /// Kind declaring the field.
        kind: EntityKind,
        /// Field key.
        field: String,
        /// Declared weight.
        weight: f32,
    },
    /// The configuration cannot be used by the engine.
    Invalid(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuickThresholdStricter {
                threshold,
                quick_threshold,
            } => write!(
                f,
                "quick_threshold {quick_threshold} is stricter than threshold {threshold}"
            ),
            Self::TotalBelowPerKind {
                limit_per_kind,
                limit_total,
            } => write!(
                f,
                "limit_total {limit_total} is below limit_per_kind {limit_per_kind}"
            ),
            Self::VeryShortMinimumQuery => {
                write!(f, "min_query_len of 1 matches almost every record")
            }
            Self::WeightBelowOne {
                kind,
                field,
                weight,
            } => write!(
                f,
                "{kind} field `{field}` has weight {weight}; matches costing {weight} or more are ignored"
            ),
            Self::Invalid(message) => write!(f, "{message}"),
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// A configuration the engine would reject is reported as a single
/// [`ConfigWarning::Invalid`] entry.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    if let Err(e) = validate_engine(&config.settings, &config.fields) {
        return vec![ConfigWarning::Invalid(e.to_string())];
    }

    let settings = &config.settings;
    let mut warnings = Vec::new();

    if settings.quick_threshold < settings.threshold {
        warnings.push(ConfigWarning::QuickThresholdStricter {
            threshold: settings.threshold,
            quick_threshold: settings.quick_threshold,
        });
    }
    if settings.limit_total < settings.limit_per_kind {
        warnings.push(ConfigWarning::TotalBelowPerKind {
            limit_per_kind: settings.limit_per_kind,
            limit_total: settings.limit_total,
        });
    }
    if settings.min_query_len == 1 {
        warnings.push(ConfigWarning::VeryShortMinimumQuery);
    }
    for (kind, set) in &config.fields {
        for field in set.iter().filter(|field| field.weight < 1.0) {
            warnings.push(ConfigWarning::WeightBelowOne {
                kind: *kind,
                field: field.key.clone(),
                weight: field.weight,
            });
        }
    }

    warnings
}

/// Checks every invariant the engine relies on.
pub fn validate_engine(
    settings: &Settings,
    fields: &BTreeMap<EntityKind, FieldSet>,
) -> Result<(), ConfigError> {
    validate_settings(settings)?;
    for kind in EntityKind::ALL {
        let Some(set) = fields.get(&kind) else {
            return Err(ConfigError::NoFields {
                kind: kind.to_string(),
            });
        };
        validate_fields(kind, set)?;
    }
    Ok(())
}

/// Checks thresholds, limits, and the priority list.
fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    for (name, value) in [
        ("threshold", settings.threshold),
        ("quick_threshold", settings.quick_threshold),
    ] {
        if !(value > 0.0 && value <= 1.0) {
            return Err(ConfigError::InvalidThreshold { name, value });
        }
    }

    for (name, value) in [
        ("min_query_len", settings.min_query_len),
        ("max_query_len", settings.max_query_len),
        ("quick_limit", settings.quick_limit),
        ("suggestion_limit", settings.suggestion_limit),
        ("max_field_chars", settings.max_field_chars),
        ("limit_per_kind", settings.limit_per_kind),
        ("limit_total", settings.limit_total),
    ] {
        if value == 0 {
            return Err(ConfigError::InvalidLimit {
                name,
                reason: "must be greater than zero".to_string(),
            });
        }
    }

    if settings.min_query_len > settings.max_query_len {
        return Err(ConfigError::InvalidLimit {
            name: "min_query_len",
            reason: format!(
                "{} exceeds max_query_len {}",
                settings.min_query_len, settings.max_query_len
            ),
        });
    }

    let unique: HashSet<EntityKind> = settings.priority.iter().copied().collect();
    if settings.priority.len() != EntityKind::ALL.len() || unique.len() != EntityKind::ALL.len() {
        return Err(ConfigError::InvalidPriority {
            got: settings
                .priority
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    Ok(())
}

/// Checks one kind's field declarations.
fn validate_fields(kind: EntityKind, fields: &FieldSet) -> Result<(), ConfigError> {
    if fields.is_empty() {
        return Err(ConfigError::NoFields {
            kind: kind.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for field in fields {
        if field.key.trim().is_empty() {
            return Err(ConfigError::EmptyFieldKey {
                kind: kind.to_string(),
            });
        }
        if !seen.insert(field.key.as_str()) {
            return Err(ConfigError::DuplicateField {
                kind: kind.to_string(),
                field: field.key.clone(),
            });
        }
        if !(field.weight.is_finite() && field.weight > 0.0) {
            return Err(ConfigError::InvalidWeight {
                kind: kind.to_string(),
                field: field.key.clone(),
                weight: field.weight,
            });
        }
    }

    Ok(())
}
