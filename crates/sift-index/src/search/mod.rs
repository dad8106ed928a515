//! Search execution over an [`IndexSet`](crate::IndexSet).
//!
//! # Search Algorithm
//!
//! 1. **Query preparation**: The raw query is trimmed, truncated to the configured maximum,
//!    normalized and split into words. Empty or too-short queries match nothing.
//!
//! 2. **Matching**: Every declared field of every entry in the selected kinds is aligned
//!    against the query. See [`fuzzy`].
//!
//! 3. **Scoring**: An entry scores the lowest `cost / weight` over its matching fields.
//!    See [`scoring`].
//!
//! 4. **Aggregation**: Results are ranked per kind, cut to the per-kind limit, merged into
//!    one global ranking and cut to the overall limit. See [`aggregation`].

mod aggregation;
mod fuzzy;
mod params;
mod ranges;
mod scoring;
mod suggest;
#[cfg(test)]
mod tests;

pub use aggregation::{Plan, aggregate};
pub use fuzzy::{MatchOutcome, Matcher};
pub use params::{Scope, SearchRequest};
pub use ranges::merge_ranges;
pub use scoring::{compare_results, score_entry};
pub use suggest::suggest;
