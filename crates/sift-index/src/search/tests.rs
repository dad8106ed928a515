use std::sync::Arc;

use proptest::prelude::*;
use sift_config::{EngineConfig, EntityKind, Settings};

use super::{Scope, SearchRequest};
use crate::{Engine, InvalidRequest, Record, RefreshOutcome, SearchError, Snapshot};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        work_items: vec![Record::new("w1").with_field("name", "Complete project proposal")],
        containers: vec![Record::new("c1").with_field("name", "Work Tasks")],
        tags: vec![Record::new("t1").with_field("name", "Important")],
    }
}

fn engine(snapshot: &Snapshot) -> Engine {
    Engine::initialize(EngineConfig::default(), snapshot)
}

#[test]
fn finds_single_work_item_with_span() {
    let snapshot = sample_snapshot();
    let result = engine(&snapshot)
        .search(&SearchRequest::new("project"))
        .unwrap();

    assert_eq!(result.total, 1);
    let hit = &result.ranked[0];
    assert_eq!(hit.kind, EntityKind::WorkItem);
    assert_eq!(hit.id, "w1");
    assert_eq!(hit.score, 0.0);

    let name = snapshot.work_items[0].field("name").unwrap();
    let spans = hit.spans_for("name");
    assert_eq!(spans.len(), 1);
    assert_eq!(&name[spans[0].clone()], "project");
}

#[test]
fn empty_query_returns_empty_result() {
    let result = engine(&sample_snapshot())
        .search(&SearchRequest::new(""))
        .unwrap();
    assert_eq!(result.total, 0);
    assert!(result.per_kind.is_empty());
    assert!(result.ranked.is_empty());
}

#[test]
fn short_query_returns_empty_result() {
    let result = engine(&sample_snapshot())
        .search(&SearchRequest::new(" p "))
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn typo_still_matches() {
    let result = engine(&sample_snapshot())
        .search(&SearchRequest::new("projct"))
        .unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.ranked[0].id, "w1");
    assert!(result.ranked[0].score <= 0.4);
}

#[test]
fn per_kind_limit_caps_results() {
    let mut snapshot = Snapshot::default();
    for i in 0..20 {
        snapshot.work_items.push(
            Record::new(format!("w{i}")).with_field("name", format!("Test case number {i}")),
        );
    }
    let result = engine(&snapshot)
        .search(&SearchRequest::new("Test").with_limit_per_kind(5))
        .unwrap();

    assert_eq!(result.kind(EntityKind::WorkItem).len(), 5);
    assert_eq!(result.total, 5);
    // Equal scores keep collection order.
    let ids: Vec<_> = result.ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["w0", "w1", "w2", "w3", "w4"]);
}

#[test]
fn missing_field_is_tolerated() {
    let snapshot = Snapshot {
        work_items: vec![
            Record::new("w1")
                .with_field("name", "Alpha report")
                .with_field("description", "Quarterly numbers"),
            Record::new("w2").with_field("name", "Quarterly planning"),
        ],
        ..Snapshot::default()
    };
    let engine = engine(&snapshot);
    let index = engine.index();
    let entry = index.get(EntityKind::WorkItem).get("w2").unwrap();
    assert!(entry.raw_value("description").is_none());

    let result = engine.search(&SearchRequest::new("quarterly")).unwrap();
    assert_eq!(result.total, 2);
    let w2 = result.ranked.iter().find(|r| r.id == "w2").unwrap();
    assert_eq!(w2.matched_fields(), vec!["name"]);
}

#[test]
fn higher_weight_field_ranks_first() {
    let snapshot = Snapshot {
        work_items: vec![
            Record::new("w1")
                .with_field("name", "Misc")
                .with_field("description", "Prepare the budgte"),
            Record::new("w2").with_field("name", "Budgte review"),
        ],
        ..Snapshot::default()
    };
    let result = engine(&snapshot)
        .search(&SearchRequest::new("budget"))
        .unwrap();
    let ids: Vec<_> = result.ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["w2", "w1"]);
    assert!(result.ranked[0].score < result.ranked[1].score);
}

#[test]
fn scope_limits_kinds() {
    let snapshot = Snapshot {
        work_items: vec![Record::new("w1").with_field("name", "Design review")],
        containers: vec![Record::new("c1").with_field("name", "Design system")],
        tags: vec![Record::new("t1").with_field("name", "design")],
    };
    let engine = engine(&snapshot);

    let all = engine.search(&SearchRequest::new("design")).unwrap();
    assert_eq!(all.total, 3);
    let kinds: Vec<_> = all.ranked.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, EntityKind::ALL.to_vec());

    let tags = engine
        .search(&SearchRequest::new("design").with_scope(Scope::Only(EntityKind::Tag)))
        .unwrap();
    assert_eq!(tags.total, 1);
    assert!(tags.ranked.iter().all(|r| r.kind == EntityKind::Tag));
}

#[test]
fn total_limit_keeps_best_across_kinds() {
    let snapshot = Snapshot {
        work_items: vec![
            Record::new("w1").with_field("name", "Roadmap draft"),
            Record::new("w2").with_field("name", "Roadmpa"),
        ],
        containers: vec![Record::new("c1").with_field("name", "Roadmap")],
        tags: vec![Record::new("t1").with_field("name", "roadmap")],
    };
    let result = engine(&snapshot)
        .search(&SearchRequest::new("roadmap").with_limit_total(3))
        .unwrap();

    let ids: Vec<_> = result.ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "c1", "t1"]);
    assert_eq!(result.total, 3);
    assert_eq!(result.kind(EntityKind::WorkItem).len(), 1);
}

#[test]
fn zero_limits_are_invalid() {
    let engine = engine(&sample_snapshot());
    let err = engine
        .search(&SearchRequest::new("project").with_limit_per_kind(0))
        .unwrap_err();
    assert!(matches!(
        err,
        SearchError::InvalidRequest(InvalidRequest::ZeroLimit { .. })
    ));
}

#[test]
fn validate_reports_short_queries() {
    let engine = engine(&sample_snapshot());
    assert!(matches!(
        engine.validate(&SearchRequest::new("p")),
        Err(SearchError::InvalidRequest(InvalidRequest::QueryTooShort { len: 1, min: 2 }))
    ));
    assert!(matches!(
        engine.validate(&SearchRequest::new("   ")),
        Err(SearchError::InvalidRequest(InvalidRequest::EmptyQuery))
    ));
    assert!(engine.validate(&SearchRequest::new("project")).is_ok());
}

#[test]
fn soft_deleted_records_are_opt_in() {
    let snapshot = Snapshot {
        work_items: vec![
            Record::new("w1").with_field("name", "Archive notes").soft_deleted(),
            Record::new("w2").with_field("name", "Archive plan"),
        ],
        ..Snapshot::default()
    };
    let engine = engine(&snapshot);

    let visible = engine.search(&SearchRequest::new("archive")).unwrap();
    assert_eq!(visible.total, 1);
    assert_eq!(visible.ranked[0].id, "w2");

    let all = engine
        .search(&SearchRequest::new("archive").with_soft_deleted(true))
        .unwrap();
    assert_eq!(all.total, 2);

    assert_eq!(engine.quick_search("archive").total, 1);
    assert_eq!(engine.suggestions("archive"), vec!["Archive plan"]);
}

#[test]
fn quick_search_is_looser_and_smaller() {
    let mut snapshot = Snapshot::default();
    for i in 0..8 {
        snapshot
            .tags
            .push(Record::new(format!("t{i}")).with_field("name", format!("project {i}")));
    }
    snapshot
        .containers
        .push(Record::new("c1").with_field("name", "prjkt"));
    let engine = engine(&snapshot);

    let quick = engine.quick_search("project");
    assert_eq!(quick.kind(EntityKind::Tag).len(), 5);
    assert_eq!(quick.kind(EntityKind::Container).len(), 1);

    let strict = engine.search(&SearchRequest::new("project")).unwrap();
    assert!(strict.kind(EntityKind::Container).is_empty());
    assert_eq!(strict.kind(EntityKind::Tag).len(), 8);
}

#[test]
fn quick_search_skips_two_letter_overlaps() {
    let engine = engine(&sample_snapshot());
    let quick = engine.quick_search("prjkt");
    assert!(quick.kind(EntityKind::Container).is_empty());
    assert!(quick.kind(EntityKind::Tag).is_empty());
}

#[test]
fn suggestions_require_minimum_length() {
    let engine = engine(&sample_snapshot());
    assert!(engine.suggestions("i").is_empty());
    assert_eq!(engine.suggestions("import"), vec!["Important"]);
}

#[test]
fn long_queries_are_truncated_not_rejected() {
    let settings = Settings {
        max_query_len: 7,
        ..Settings::default()
    };
    let config = EngineConfig::default().with_settings(settings).unwrap();
    let engine = Engine::initialize(config, &sample_snapshot());
    let result = engine
        .search(&SearchRequest::new("project zzzzzzzzzzzzzzzzzzzz"))
        .unwrap();
    assert_eq!(result.total, 1);
}

#[test]
fn empty_snapshot_matches_nothing() {
    let engine = engine(&Snapshot::default());
    let result = engine.search(&SearchRequest::new("anything")).unwrap();
    assert!(result.is_empty());
    assert!(engine.suggestions("anything").is_empty());
}

#[test]
fn refresh_swaps_index_and_old_handles_survive() {
    let engine = engine(&sample_snapshot());
    let before = engine.index();

    let mut changed = sample_snapshot();
    changed
        .work_items
        .push(Record::new("w2").with_field("name", "Project kickoff"));
    assert_eq!(engine.refresh_index(&changed), RefreshOutcome::Rebuilt);

    assert_eq!(before.get(EntityKind::WorkItem).len(), 1);
    assert_eq!(engine.index().get(EntityKind::WorkItem).len(), 2);
    let result = engine.search(&SearchRequest::new("project")).unwrap();
    assert_eq!(result.total, 2);
}

#[test]
fn refresh_with_same_snapshot_is_idempotent() {
    let snapshot = sample_snapshot();
    let engine = engine(&snapshot);
    let first = engine.index();

    assert_eq!(engine.refresh_index(&snapshot), RefreshOutcome::Unchanged);
    assert_eq!(engine.refresh_index(&snapshot), RefreshOutcome::Unchanged);
    let after = engine.index();
    assert!(Arc::ptr_eq(&first, &after));
    assert_eq!(*after, crate::IndexSet::build(&snapshot, engine.config()));
}

#[test]
fn refresh_reflects_deletions() {
    let engine = engine(&sample_snapshot());
    let mut changed = sample_snapshot();
    changed.work_items[0].deleted = true;
    assert_eq!(engine.refresh_index(&changed), RefreshOutcome::Rebuilt);
    assert!(
        engine
            .search(&SearchRequest::new("project"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn custom_priority_breaks_ties() {
    let settings = Settings {
        priority: vec![EntityKind::Tag, EntityKind::Container, EntityKind::WorkItem],
        ..Settings::default()
    };
    let config = EngineConfig::default().with_settings(settings).unwrap();
    let snapshot = Snapshot {
        work_items: vec![Record::new("w1").with_field("name", "Design")],
        containers: vec![Record::new("c1").with_field("name", "Design")],
        tags: vec![Record::new("t1").with_field("name", "Design")],
    };
    let engine = Engine::initialize(config, &snapshot);
    let ids: Vec<_> = engine
        .search(&SearchRequest::new("design"))
        .unwrap()
        .ranked
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["t1", "c1", "w1"]);
}

/// Strategy for record rows: name, description, deleted.
fn rows_strategy() -> impl Strategy<Value = Vec<(String, String, bool)>> {
    prop::collection::vec(("[a-d ]{0,12}", "[a-d ]{0,16}", any::<bool>()), 0..12)
}

/// Builds records from generated rows.
fn build_records(rows: Vec<(String, String, bool)>, prefix: &str) -> Vec<Record> {
    rows.into_iter()
        .enumerate()
        .map(|(i, (name, description, deleted))| Record {
            deleted,
            ..Record::new(format!("{prefix}{i}"))
                .with_field("name", name)
                .with_field("description", description)
        })
        .collect()
}

/// Strategy for small snapshots over a tiny alphabet so matches are common.
fn snapshot_strategy() -> impl Strategy<Value = Snapshot> {
    (rows_strategy(), rows_strategy(), rows_strategy()).prop_map(|(w, c, t)| Snapshot {
        work_items: build_records(w, "w"),
        containers: build_records(c, "c"),
        tags: build_records(t, "t"),
    })
}

proptest! {
    #[test]
    fn search_is_deterministic(snapshot in snapshot_strategy(), query in "[a-d ]{0,6}") {
        let engine = engine(&snapshot);
        let request = SearchRequest::new(query);
        let first = engine.search(&request).unwrap();
        let second = engine.search(&request).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn results_respect_bounds_and_limits(
        snapshot in snapshot_strategy(),
        query in "[a-d]{2,5}",
        per_kind in 1usize..6,
        total in 1usize..10,
    ) {
        let engine = engine(&snapshot);
        let request = SearchRequest::new(query)
            .with_limit_per_kind(per_kind)
            .with_limit_total(total);
        let result = engine.search(&request).unwrap();

        prop_assert!(result.total <= total);
        prop_assert_eq!(result.total, result.ranked.len());
        for results in result.per_kind.values() {
            prop_assert!(!results.is_empty());
            prop_assert!(results.len() <= per_kind);
        }
        for hit in &result.ranked {
            prop_assert!((0.0..=1.0).contains(&hit.score));
            let record = &snapshot.records(hit.kind)[hit.position];
            prop_assert!(!record.deleted);
            for span in &hit.matches {
                let raw = record.field(&span.field).unwrap_or_default();
                prop_assert!(span.start < span.end && span.end <= raw.len());
            }
        }
    }

    #[test]
    fn nothing_above_threshold_is_returned(
        snapshot in snapshot_strategy(),
        query in "[a-d]{2,5}",
    ) {
        let engine = engine(&snapshot);
        let result = engine.search(&SearchRequest::new(query.clone())).unwrap();
        let matcher = super::Matcher::new(0.4, sift_query::QueryLimits::default());
        for hit in &result.ranked {
            let record = &snapshot.records(hit.kind)[hit.position];
            let best = engine
                .config()
                .fields(hit.kind)
                .iter()
                .filter_map(|f| matcher.match_str(&query, record.field(&f.key)?))
                .map(|o| o.cost)
                .fold(f32::INFINITY, f32::min);
            prop_assert!(best <= 0.4);
        }
    }

    #[test]
    fn scope_isolation_holds(snapshot in snapshot_strategy(), query in "[a-d]{2,5}") {
        let engine = engine(&snapshot);
        for kind in EntityKind::ALL {
            let request = SearchRequest::new(query.clone()).with_scope(Scope::Only(kind));
            let result = engine.search(&request).unwrap();
            prop_assert!(result.ranked.iter().all(|r| r.kind == kind));
        }
    }

    #[test]
    fn refresh_is_idempotent(snapshot in snapshot_strategy()) {
        let engine = engine(&Snapshot::default());
        engine.refresh_index(&snapshot);
        let once = engine.index();
        prop_assert_eq!(engine.refresh_index(&snapshot), RefreshOutcome::Unchanged);
        prop_assert_eq!(once, engine.index());
    }
}
