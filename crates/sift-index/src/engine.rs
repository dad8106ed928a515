//! The engine handle owned by the host.
//!
//! An [`Engine`] owns a validated configuration and the active [`IndexSet`]. The index is
//! swapped wholesale on refresh: readers that obtained an `Arc<IndexSet>` before the swap
//! keep a consistent view until they drop it, and a search never observes a partially
//! rebuilt index.

use std::sync::Arc;

use parking_lot::RwLock;
use sift_config::{Config, EngineConfig};
use sift_query::{Query, QueryLimits};
use tracing::debug;

use crate::{
    AggregatedResult, IndexSet, InvalidRequest, SearchError, Snapshot,
    search::{Matcher, Plan, Scope, SearchRequest, aggregate, suggest},
};

/// What a refresh did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot differed and a new index is now active.
    Rebuilt,
    /// The snapshot produced an identical index; the active one was kept.
    Unchanged,
}

/// A search engine over three record collections.
///
/// There is no uninitialized state: [`Engine::initialize`] builds the first index before
/// returning, so every engine can be searched.
#[derive(Debug)]
pub struct Engine {
    /// Validated configuration, fixed for the engine's lifetime.
    config: EngineConfig,
    /// The active index.
    active: RwLock<Arc<IndexSet>>,
}

impl Engine {
    /// Creates an engine and builds its index from an initial snapshot.
    pub fn initialize(config: EngineConfig, snapshot: &Snapshot) -> Self {
        let index = IndexSet::build(snapshot, &config);
        Self {
            config,
            active: RwLock::new(Arc::new(index)),
        }
    }

    /// Validates a loaded configuration and creates an engine from it.
    pub fn from_config(config: &Config, snapshot: &Snapshot) -> Result<Self, SearchError> {
        Ok(Self::initialize(config.engine_config()?, snapshot))
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the active index.
    ///
    /// The returned handle stays valid across later refreshes.
    pub fn index(&self) -> Arc<IndexSet> {
        Arc::clone(&self.active.read())
    }

    /// Rebuilds the index from a new snapshot.
    ///
    /// Must be called after any record is created, updated or deleted; the engine does not
    /// observe the collections itself. Refreshing with an unchanged snapshot is harmless.
    pub fn refresh_index(&self, snapshot: &Snapshot) -> RefreshOutcome {
        let fresh = IndexSet::build(snapshot, &self.config);
        let mut active = self.active.write();
        if active.same_inputs(&fresh) {
            debug!("index unchanged");
            return RefreshOutcome::Unchanged;
        }

        *active = Arc::new(fresh);
        debug!(entries = active.len(), "index rebuilt");
        RefreshOutcome::Rebuilt
    }

    /// Checks a request without running it.
    ///
    /// Reports empty and too-short queries and zero limits.
    pub fn validate(&self, request: &SearchRequest) -> Result<(), SearchError> {
        request.check_limits()?;
        Query::parse(&request.query, &self.limits()).map_err(InvalidRequest::from)?;
        Ok(())
    }

    /// Runs a search.
    ///
    /// Zero limits are rejected. Empty and too-short queries are not errors: they produce
    /// an empty result.
    pub fn search(&self, request: &SearchRequest) -> Result<AggregatedResult, SearchError> {
        request.check_limits()?;
        let settings = self.config.settings();
        let (limit_per_kind, limit_total) = request.limits(settings);
        let plan = Plan {
            kinds: request.scope.kinds(self.config.priority()),
            matcher: Matcher::new(settings.threshold, self.limits()),
            limit_per_kind,
            limit_total,
            include_deleted: request.include_soft_deleted,
        };
        Ok(self.run(&request.query, &plan))
    }

    /// Runs an as-you-type preview search.
    ///
    /// Uses the looser quick-search threshold and the small quick-search limit per kind.
    /// Soft-deleted records never appear. Invalid queries produce an empty result.
    pub fn quick_search(&self, query: &str) -> AggregatedResult {
        let settings = self.config.settings();
        let plan = Plan {
            kinds: Scope::All.kinds(self.config.priority()),
            matcher: Matcher::new(settings.quick_threshold, self.limits()),
            limit_per_kind: settings.quick_limit,
            limit_total: settings.limit_total,
            include_deleted: false,
        };
        self.run(query, &plan)
    }

    /// Returns distinct matching field values for autocomplete.
    ///
    /// Empty for inputs shorter than the minimum query length.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let Ok(query) = Query::parse(partial, &self.limits()) else {
            return Vec::new();
        };
        let settings = self.config.settings();
        let matcher = Matcher::new(settings.threshold, self.limits());
        suggest(
            &self.index(),
            &self.config,
            &query,
            &matcher,
            settings.suggestion_limit,
        )
    }

    /// Parses the query and runs a plan against the active index.
    fn run(&self, raw_query: &str, plan: &Plan) -> AggregatedResult {
        match Query::parse(raw_query, &self.limits()) {
            Ok(query) => aggregate(&self.index(), &self.config, &query, plan),
            Err(e) => {
                debug!(error = %e, "query rejected");
                AggregatedResult::default()
            }
        }
    }

    /// Query limits from the settings.
    fn limits(&self) -> QueryLimits {
        let settings = self.config.settings();
        QueryLimits {
            min_len: settings.min_query_len,
            max_len: settings.max_query_len,
        }
    }
}
