//! Entity scoring and result ordering.
//!
//! An entity's score is the best (lowest) weighted cost over its matching fields:
//! `cost / weight`. A field with weight 2 therefore needs only half the similarity of a
//! weight 1 field to contribute the same score. A weight below 1 raises the cost, and a field
//! whose weighted cost reaches 1 counts as not matching.

use std::cmp::Ordering;

use sift_config::{EngineConfig, FieldSet};
use sift_query::Query;

use super::fuzzy::Matcher;
use crate::{IndexEntry, MatchSpan, ScoredResult};

/// Scores one entry against a query.
///
/// Returns `None` when no declared field matches with a weighted cost below 1. Spans are
/// collected from every such field, not only the best one.
pub fn score_entry(
    entry: &IndexEntry,
    query: &Query,
    fields: &FieldSet,
    matcher: &Matcher,
) -> Option<ScoredResult> {
    let mut best: Option<f32> = None;
    let mut matches = Vec::new();

    for field in fields {
        let Some(value) = entry.normalized_value(&field.key) else {
            continue;
        };
        let Some(outcome) = matcher.match_text(query, value) else {
            continue;
        };

        let weighted = outcome.cost / field.weight;
        if weighted >= 1.0 {
            continue;
        }
        best = Some(best.map_or(weighted, |b| b.min(weighted)));
        matches.extend(
            outcome
                .spans
                .into_iter()
                .map(|range| MatchSpan::new(field.key.clone(), range)),
        );
    }

    best.map(|score| ScoredResult {
        id: entry.id.clone(),
        kind: entry.kind,
        score,
        position: entry.position,
        matches,
    })
}

/// Orders results best first.
///
/// Lower scores rank first; ties fall back to kind priority, then collection position.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult, config: &EngineConfig) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| config.priority_of(a.kind).cmp(&config.priority_of(b.kind)))
        .then_with(|| a.position.cmp(&b.position))
}
