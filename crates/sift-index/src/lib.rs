//! In-memory fuzzy search index and ranking engine for sift.
//!
//! This crate searches three record collections (work items, containers and tags) with
//! typo-tolerant matching. It handles:
//! - Index construction from a read-only [`Snapshot`] of the collections
//! - Approximate, location-independent matching of each declared field
//! - Weighted multi-field scoring and deterministic cross-kind ranking
//! - Per-kind and overall result limits
//! - Match spans in raw field text, ready for highlighting
//! - Copy-on-write index refresh through the [`Engine`] handle
//!
//! # Example
//!
//! ```
//! use sift_config::{EngineConfig, EntityKind};
//! use sift_index::{Engine, Record, SearchRequest, Snapshot};
//!
//! let mut snapshot = Snapshot::default();
//! snapshot
//!     .work_items
//!     .push(Record::new("1").with_field("name", "Complete project proposal"));
//! snapshot
//!     .tags
//!     .push(Record::new("2").with_field("name", "Important"));
//!
//! let engine = Engine::initialize(EngineConfig::default(), &snapshot);
//! let result = engine.search(&SearchRequest::new("projct")).unwrap();
//!
//! assert_eq!(result.total, 1);
//! assert_eq!(result.ranked[0].kind, EntityKind::WorkItem);
//! ```

#![warn(missing_docs)]

mod config_hash;
mod document;
mod engine;
mod error;
mod indexer;
mod result;
mod search;

pub use config_hash::{INDEX_VERSION, fingerprint, fingerprint_string};
pub use document::{Record, Snapshot};
pub use engine::{Engine, RefreshOutcome};
pub use error::{InvalidRequest, SearchError};
pub use indexer::{IndexEntry, IndexSet, SearchIndex};
pub use result::{AggregatedResult, MatchSpan, ScoredResult};
pub use search::{
    MatchOutcome, Matcher, Scope, SearchRequest, compare_results, merge_ranges, score_entry,
};
