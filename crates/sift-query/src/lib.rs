//! Query normalization and tokenization for sift search.
//!
//! Matching in sift is case-insensitive and whitespace-insensitive, but highlight spans
//! must point into the text the user actually wrote. This crate provides:
//!
//! - **Normalization**: [`normalize`] lower-cases and collapses whitespace
//! - **Offset tracking**: [`NormalizedText`] remembers which raw bytes every normalized
//!   character came from, so match positions translate back to the original string
//! - **Tokenization**: [`tokenize`] splits normalized text into words with positions
//! - **Queries**: [`Query::parse`] applies length limits and prepares a query for matching
//!
//! # Example
//!
//! ```
//! use sift_query::{NormalizedText, normalize};
//!
//! assert_eq!(normalize("  Work   Tasks "), "work tasks");
//!
//! let text = NormalizedText::new("  Work   Tasks ");
//! // "tasks" starts at normalized char 5; it maps back to raw bytes 9..14.
//! assert_eq!(text.raw_range(5..10), Some(9..14));
//! ```

#![warn(missing_docs)]

mod error;
mod normalize;
mod query;
mod token;

pub use error::QueryError;
pub use normalize::{NormalizedText, fold_char, normalize};
pub use query::{Query, QueryLimits};
pub use token::{Token, tokenize};
