//! Cross-kind aggregation.
//!
//! Each selected kind is scored independently, sorted, and cut to the per-kind limit. The
//! survivors are then merged into one globally ranked list and cut to the overall limit.
//! Reported totals count what is returned, never the matches that were cut.

use sift_config::{EngineConfig, EntityKind};
use sift_query::Query;
use tracing::debug;

use super::{
    fuzzy::Matcher,
    scoring::{compare_results, score_entry},
};
use crate::{AggregatedResult, IndexSet, ScoredResult};

/// A fully resolved search plan.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Kinds to search, in priority order.
    pub kinds: Vec<EntityKind>,
    /// Matcher carrying the acceptance threshold.
    pub matcher: Matcher,
    /// Maximum results per kind.
    pub limit_per_kind: usize,
    /// Maximum results overall.
    pub limit_total: usize,
    /// Whether soft-deleted entries may match.
    pub include_deleted: bool,
}

/// Runs a plan against an index set.
pub fn aggregate(
    index: &IndexSet,
    config: &EngineConfig,
    query: &Query,
    plan: &Plan,
) -> AggregatedResult {
    let mut ranked: Vec<ScoredResult> = Vec::new();
    for kind in &plan.kinds {
        ranked.extend(search_kind(index, config, query, plan, *kind));
    }

    ranked.sort_by(|a, b| compare_results(a, b, config));
    ranked.truncate(plan.limit_total);

    let result = AggregatedResult::from_ranked(ranked);
    debug!(
        query = %query.text(),
        kinds = plan.kinds.len(),
        total = result.total,
        "search complete"
    );
    result
}

/// Scores, sorts and truncates one kind.
fn search_kind(
    index: &IndexSet,
    config: &EngineConfig,
    query: &Query,
    plan: &Plan,
    kind: EntityKind,
) -> Vec<ScoredResult> {
    let fields = config.fields(kind);
    let mut results: Vec<ScoredResult> = index
        .get(kind)
        .entries()
        .iter()
        .filter(|entry| plan.include_deleted || !entry.deleted)
        .filter_map(|entry| score_entry(entry, query, fields, &plan.matcher))
        .collect();

    results.sort_by(|a, b| compare_results(a, b, config));
    results.truncate(plan.limit_per_kind);
    results
}

#[cfg(test)]
mod tests {
    use sift_query::QueryLimits;

    use super::*;
    use crate::{Record, Snapshot};

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        for i in 0..4 {
            snapshot
                .work_items
                .push(Record::new(format!("w{i}")).with_field("name", format!("Report {i}")));
        }
        snapshot
            .containers
            .push(Record::new("c0").with_field("name", "Reports"));
        snapshot
            .tags
            .push(Record::new("t0").with_field("name", "report"));
        snapshot
            .tags
            .push(Record::new("t1").with_field("name", "report").soft_deleted());
        snapshot
    }

    fn plan(kinds: Vec<EntityKind>, limit_per_kind: usize, limit_total: usize) -> Plan {
        Plan {
            kinds,
            matcher: Matcher::new(0.4, QueryLimits::default()),
            limit_per_kind,
            limit_total,
            include_deleted: false,
        }
    }

    fn run(plan: &Plan) -> AggregatedResult {
        let config = EngineConfig::default();
        let index = IndexSet::build(&snapshot(), &config);
        let query = Query::parse("report", &QueryLimits::default()).unwrap();
        aggregate(&index, &config, &query, plan)
    }

    #[test]
    fn per_kind_limit_applies_before_total() {
        let result = run(&plan(EntityKind::ALL.to_vec(), 2, 50));
        assert_eq!(result.kind(EntityKind::WorkItem).len(), 2);
        assert_eq!(result.kind(EntityKind::Container).len(), 1);
        assert_eq!(result.kind(EntityKind::Tag).len(), 1);
        assert_eq!(result.total, 4);
    }

    #[test]
    fn total_limit_cuts_the_global_ranking() {
        let result = run(&plan(EntityKind::ALL.to_vec(), 10, 3));
        assert_eq!(result.total, 3);
        // All candidates score 0, so kind priority decides.
        let ids: Vec<_> = result.ranked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["w0", "w1", "w2"]);
        assert!(result.kind(EntityKind::Tag).is_empty());
    }

    #[test]
    fn soft_deleted_entries_are_hidden_by_default() {
        let result = run(&plan(vec![EntityKind::Tag], 10, 10));
        assert_eq!(result.total, 1);
        assert_eq!(result.kind(EntityKind::Tag)[0].id, "t0");

        let mut with_deleted = plan(vec![EntityKind::Tag], 10, 10);
        with_deleted.include_deleted = true;
        assert_eq!(run(&with_deleted).total, 2);
    }

    #[test]
    fn only_planned_kinds_are_searched() {
        let result = run(&plan(vec![EntityKind::Container], 10, 10));
        assert_eq!(result.total, 1);
        assert!(result.per_kind.keys().all(|k| *k == EntityKind::Container));
    }
}
