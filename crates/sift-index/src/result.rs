//! Search result types.

use std::{collections::BTreeMap, ops::Range};

use serde::Serialize;
use sift_config::EntityKind;

/// Where a match was found in a field's raw value.
///
/// Offsets are byte offsets into the raw UTF-8 value, end-exclusive, and always fall on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    /// Key of the field the span belongs to.
    pub field: String,
    /// Start offset.
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl MatchSpan {
    /// Creates a span for a field from a byte range.
    pub fn new(field: impl Into<String>, range: Range<usize>) -> Self {
        Self {
            field: field.into(),
            start: range.start,
            end: range.end,
        }
    }

    /// Returns the span as a byte range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A matched record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    /// Record identifier.
    pub id: String,
    /// Record kind.
    pub kind: EntityKind,
    /// Match cost in `[0, 1]`; `0` is a perfect match.
    pub score: f32,
    /// Position of the record in its collection.
    pub position: usize,
    /// Spans from every field that matched, grouped by field in declaration order.
    pub matches: Vec<MatchSpan>,
}

impl ScoredResult {
    /// Returns the spans of one field as byte ranges.
    pub fn spans_for(&self, field: &str) -> Vec<Range<usize>> {
        self.matches
            .iter()
            .filter(|m| m.field == field)
            .map(MatchSpan::range)
            .collect()
    }

    /// Returns the keys of every matched field, in declaration order.
    pub fn matched_fields(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for span in &self.matches {
            if keys.last() != Some(&span.field.as_str()) {
                keys.push(&span.field);
            }
        }
        keys
    }
}

/// The outcome of a search across kinds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedResult {
    /// Results per kind, best first. Kinds without results are absent.
    pub per_kind: BTreeMap<EntityKind, Vec<ScoredResult>>,
    /// Number of results returned.
    pub total: usize,
    /// Every returned result in global rank order.
    pub ranked: Vec<ScoredResult>,
}

impl AggregatedResult {
    /// Builds a result from a globally ranked list.
    pub(crate) fn from_ranked(ranked: Vec<ScoredResult>) -> Self {
        let mut per_kind: BTreeMap<EntityKind, Vec<ScoredResult>> = BTreeMap::new();
        for result in &ranked {
            per_kind.entry(result.kind).or_default().push(result.clone());
        }
        Self {
            per_kind,
            total: ranked.len(),
            ranked,
        }
    }

    /// Returns the results of one kind.
    pub fn kind(&self, kind: EntityKind) -> &[ScoredResult] {
        self.per_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
