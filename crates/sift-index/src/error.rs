//! Error types for the sift-index crate.

use sift_config::ConfigError;
use sift_query::QueryError;
use thiserror::Error;

/// Reasons a search request is rejected before any matching happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRequest {
    /// The query is empty after trimming.
    #[error("query is empty")]
    EmptyQuery,

    /// The query is shorter than the configured minimum.
    #[error("query is too short: {len} characters, minimum is {min}")]
    QueryTooShort {
        /// Normalized query length.
        len: usize,
        /// Configured minimum.
        min: usize,
    },

    /// A result limit of zero.
    #[error("{name} must be greater than zero")]
    ZeroLimit {
        /// Which limit.
        name: &'static str,
    },

    /// A scope that names no known kind.
    #[error("unknown scope: {scope}")]
    UnknownScope {
        /// The scope as given.
        scope: String,
    },
}

impl From<QueryError> for InvalidRequest {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Empty => Self::EmptyQuery,
            QueryError::TooShort { len, min } => Self::QueryTooShort { len, min },
        }
    }
}

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request was rejected.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    /// The engine configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A snapshot could not be parsed.
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
