//! Error types for query preparation.

use thiserror::Error;

/// Reasons a query is not searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query is empty after trimming.
    #[error("query is empty")]
    Empty,

    /// The query is shorter than the configured minimum.
    #[error("query is {len} characters, minimum is {min}")]
    TooShort {
        /// Normalized query length in characters.
        len: usize,
        /// Configured minimum length.
        min: usize,
    },
}
