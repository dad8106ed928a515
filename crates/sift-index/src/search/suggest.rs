//! Autocomplete suggestions.
//!
//! Suggestions are matched field values rather than records. Values are ranked like
//! results (score, then kind priority, then collection order, then field order) and
//! deduplicated on their normalized form, keeping the best-ranked spelling.

use std::collections::HashSet;

use sift_config::EngineConfig;
use sift_query::Query;

use super::fuzzy::Matcher;
use crate::IndexSet;

/// A field value that matched the partial query.
struct Candidate<'a> {
    /// Weighted match cost.
    score: f32,
    /// Rank of the entry's kind.
    priority: usize,
    /// Entry position in its collection.
    position: usize,
    /// Field position in the kind's declaration.
    field: usize,
    /// Raw value.
    value: &'a str,
    /// Normalized value, used for deduplication.
    normalized: String,
}

/// Collects up to `limit` distinct matching field values across every kind.
pub fn suggest(
    index: &IndexSet,
    config: &EngineConfig,
    query: &Query,
    matcher: &Matcher,
    limit: usize,
) -> Vec<String> {
    let mut candidates = Vec::new();

    for kind in config.priority() {
        let priority = config.priority_of(*kind);
        let fields = config.fields(*kind);
        for entry in index.get(*kind).entries().iter().filter(|e| !e.deleted) {
            for (field_index, field) in fields.iter().enumerate() {
                let (Some(raw), Some(normalized)) = (
                    entry.raw_value(&field.key),
                    entry.normalized_value(&field.key),
                ) else {
                    continue;
                };
                let Some(outcome) = matcher.match_text(query, normalized) else {
                    continue;
                };
                candidates.push(Candidate {
                    score: (outcome.cost / field.weight).clamp(0.0, 1.0),
                    priority,
                    position: entry.position,
                    field: field_index,
                    value: raw,
                    normalized: normalized.text(),
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| a.priority.cmp(&b.priority))
            .then_with(|| a.position.cmp(&b.position))
            .then_with(|| a.field.cmp(&b.field))
    });

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.normalized.clone()))
        .take(limit)
        .map(|c| c.value.trim().to_string())
        .collect()
}
