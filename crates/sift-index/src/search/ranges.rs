//! Range utilities for merging and extracting match spans.

use std::ops::Range;

/// Merges overlapping or adjacent ranges and drops empty ones.
///
/// The result is sorted by start position with no overlaps.
pub fn merge_ranges(mut ranges: Vec<Range<usize>>) -> Vec<Range<usize>> {
    ranges.retain(|r| r.start < r.end);
    ranges.sort_by_key(|r| r.start);

    let mut iter = ranges.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };
    let mut merged = Vec::new();
    for range in iter {
        if range.start <= current.end {
            current.end = current.end.max(range.end);
        } else {
            merged.push(current);
            current = range;
        }
    }
    merged.push(current);

    merged
}

/// Collapses marked positions into runs of consecutive indices.
///
/// `marked` must be sorted ascending; duplicates are ignored.
pub fn runs(marked: &[usize]) -> Vec<Range<usize>> {
    let mut out: Vec<Range<usize>> = Vec::new();
    for &i in marked {
        match out.last_mut() {
            Some(run) if i <= run.end => run.end = run.end.max(i + 1),
            _ => out.push(i..i + 1),
        }
    }
    out
}
