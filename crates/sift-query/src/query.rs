//! Query preparation: limits, normalization, tokenization.

use crate::{NormalizedText, QueryError, Token, tokenize};

/// Length limits applied to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Minimum normalized length, in characters.
    pub min_len: usize,
    /// Maximum length, in characters; longer input is truncated.
    pub max_len: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 256,
        }
    }
}

/// A query ready for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Normalized query text with offsets into the (trimmed) input.
    normalized: NormalizedText,
    /// Words of the normalized query.
    tokens: Vec<Token>,
}

impl Query {
    /// Prepares user input for matching.
    ///
    /// Input longer than `limits.max_len` characters is truncated rather than rejected.
    /// Empty input and input shorter than `limits.min_len` are rejected.
    pub fn parse(input: &str, limits: &QueryLimits) -> Result<Self, QueryError> {
        let normalized = NormalizedText::truncated(input, limits.max_len);
        if normalized.is_empty() {
            return Err(QueryError::Empty);
        }
        if normalized.len() < limits.min_len {
            return Err(QueryError::TooShort {
                len: normalized.len(),
                min: limits.min_len,
            });
        }

        let tokens = tokenize(&normalized);
        Ok(Self { normalized, tokens })
    }

    /// Returns the normalized query characters.
    pub fn chars(&self) -> &[char] {
        self.normalized.chars()
    }

    /// Returns the normalized query as a string.
    pub fn text(&self) -> String {
        self.normalized.text()
    }

    /// Length of the normalized query in characters.
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Always false: empty queries are rejected by [`Query::parse`].
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns the words of the query.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// True when the query has more than one word.
    pub fn is_multi_token(&self) -> bool {
        self.tokens.len() > 1
    }
}
