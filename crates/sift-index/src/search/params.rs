//! Parameter types for search execution.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use sift_config::{EntityKind, Settings};

use crate::InvalidRequest;

/// Which kinds a search covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Every kind.
    #[default]
    All,
    /// A single kind.
    Only(EntityKind),
}

impl Scope {
    /// Returns the kinds to search, in the given priority order.
    pub fn kinds(self, priority: &[EntityKind]) -> Vec<EntityKind> {
        match self {
            Self::All => priority.to_vec(),
            Self::Only(kind) => vec![kind],
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl FromStr for Scope {
    type Err = InvalidRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<EntityKind>()
            .map(Self::Only)
            .map_err(|_| InvalidRequest::UnknownScope {
                scope: s.to_string(),
            })
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A search request.
///
/// Limits left unset fall back to the engine's configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw query text.
    pub query: String,
    /// Kinds to search.
    #[serde(default)]
    pub scope: Scope,
    /// Maximum results across all kinds.
    #[serde(default)]
    pub limit_total: Option<usize>,
    /// Maximum results per kind.
    #[serde(default)]
    pub limit_per_kind: Option<usize>,
    /// Whether soft-deleted records may appear.
    #[serde(default)]
    pub include_soft_deleted: bool,
}

impl SearchRequest {
    /// Creates a request for `query` across all kinds.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restricts the search to a scope.
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the overall result limit.
    pub fn with_limit_total(mut self, limit: usize) -> Self {
        self.limit_total = Some(limit);
        self
    }

    /// Sets the per-kind result limit.
    pub fn with_limit_per_kind(mut self, limit: usize) -> Self {
        self.limit_per_kind = Some(limit);
        self
    }

    /// Includes soft-deleted records.
    pub fn with_soft_deleted(mut self, include: bool) -> Self {
        self.include_soft_deleted = include;
        self
    }

    /// Returns the effective limits as `(per_kind, total)`.
    pub(crate) fn limits(&self, settings: &Settings) -> (usize, usize) {
        (
            self.limit_per_kind.unwrap_or(settings.limit_per_kind),
            self.limit_total.unwrap_or(settings.limit_total),
        )
    }

    /// Rejects zero limits.
    pub(crate) fn check_limits(&self) -> Result<(), InvalidRequest> {
        if self.limit_per_kind == Some(0) {
            return Err(InvalidRequest::ZeroLimit {
                name: "limit_per_kind",
            });
        }
        if self.limit_total == Some(0) {
            return Err(InvalidRequest::ZeroLimit {
                name: "limit_total",
            });
        }
        Ok(())
    }
}
