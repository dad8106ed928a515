//! Approximate substring matching.
//!
//! The query is aligned against the best-matching window of the candidate using a
//! semi-global edit distance: candidate characters before and after the window are free,
//! so a match anywhere in the candidate counts the same as a match at the start. The cost
//! of an alignment is its edit distance divided by the longer of the query and the window.
//!
//! Multi-word queries are also matched word by word. Whichever of the two readings is
//! cheaper wins, so `"proposal project"` finds `"Complete project proposal"`.

use std::{mem, ops::Range};

use sift_query::{NormalizedText, Query, QueryLimits};

use super::ranges::{merge_ranges, runs};

/// The result of matching a query against one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Match cost in `[0, 1]`; `0` is a perfect match.
    pub cost: f32,
    /// Byte ranges of the raw candidate that matched, sorted and non-overlapping.
    pub spans: Vec<Range<usize>>,
}

/// Matches queries against candidates with a fixed acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    /// Highest accepted cost.
    threshold: f32,
    /// Query length limits; words shorter than the minimum are not matched on their own.
    limits: QueryLimits,
}

impl Matcher {
    /// Creates a matcher.
    pub fn new(threshold: f32, limits: QueryLimits) -> Self {
        Self { threshold, limits }
    }

    /// Returns the acceptance threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Matches raw strings.
    ///
    /// Returns `None` for queries that are empty or shorter than the minimum length, and for
    /// candidates that do not match within the threshold.
    pub fn match_str(&self, query: &str, candidate: &str) -> Option<MatchOutcome> {
        let query = Query::parse(query, &self.limits).ok()?;
        self.match_text(&query, &NormalizedText::new(candidate))
    }

    /// Matches a parsed query against a normalized candidate.
    pub fn match_text(&self, query: &Query, candidate: &NormalizedText) -> Option<MatchOutcome> {
        let chars = candidate.chars();
        let whole = align(query.chars(), chars, self.threshold).map(|a| CharMatch {
            cost: a.cost(query.len()),
            matched: a.matched,
        });
        let words = if query.is_multi_token() {
            self.match_words(query, chars)
        } else {
            None
        };

        let best = match (whole, words) {
            (Some(w), Some(t)) => {
                if t.cost < w.cost {
                    t
                } else {
                    w
                }
            }
            (w, t) => w.or(t)?,
        };

        Some(MatchOutcome {
            cost: best.cost,
            spans: best.raw_spans(candidate),
        })
    }

    /// Matches each query word on its own; every eligible word must match.
    fn match_words(&self, query: &Query, candidate: &[char]) -> Option<CharMatch> {
        let mut distance = 0;
        let mut denominator = 0;
        let mut matched = Vec::new();

        let words = query
            .tokens()
            .iter()
            .filter(|t| t.len() >= self.limits.min_len);
        for word in words {
            let chars = &query.chars()[word.chars.clone()];
            let alignment = align(chars, candidate, self.threshold)?;
            distance += alignment.distance;
            denominator += chars.len().max(alignment.window.len());
            matched.extend(alignment.matched);
        }
        if denominator == 0 {
            return None;
        }

        matched.sort_unstable();
        matched.dedup();
        Some(CharMatch {
            cost: ratio(distance, denominator),
            matched,
        })
    }
}

/// A match expressed in normalized candidate positions.
struct CharMatch {
    /// Match cost.
    cost: f32,
    /// Sorted candidate positions that matched a query character exactly.
    matched: Vec<usize>,
}

impl CharMatch {
    /// Converts matched positions into merged byte ranges of the raw candidate.
    fn raw_spans(&self, candidate: &NormalizedText) -> Vec<Range<usize>> {
        let ranges = runs(&self.matched)
            .into_iter()
            .filter_map(|run| candidate.raw_range(run))
            .collect();
        merge_ranges(ranges)
    }
}

/// The best alignment of a query inside a candidate.
#[derive(Debug)]
struct Alignment {
    /// Edit distance.
    distance: usize,
    /// Aligned candidate window, in characters.
    window: Range<usize>,
    /// Candidate positions that matched a query character exactly, ascending.
    matched: Vec<usize>,
}

impl Alignment {
    /// Cost of this alignment for a query of `query_len` characters.
    fn cost(&self, query_len: usize) -> f32 {
        ratio(self.distance, query_len.max(self.window.len()))
    }
}

/// Divides and clamps to `[0, 1]`.
fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        return 1.0;
    }
    (numerator as f32 / denominator as f32).clamp(0.0, 1.0)
}

/// Aligns `query` against its best window in `candidate`.
///
/// Returns `None` when either side is empty or the cost exceeds `threshold`.
fn align(query: &[char], candidate: &[char], threshold: f32) -> Option<Alignment> {
    if query.is_empty() || candidate.is_empty() {
        return None;
    }

    let (distance, end) = best_end(query, candidate);
    // The window is at most query + distance long, which bounds the cost from below.
    let span = query.len() + distance;
    if ratio(distance, span) > threshold {
        return None;
    }

    let lo = end.saturating_sub(span);
    let (window, matched) = backtrace(query, &candidate[lo..end]);
    let alignment = Alignment {
        distance,
        window: lo + window.start..lo + window.end,
        matched: matched.into_iter().map(|j| lo + j).collect(),
    };

    (alignment.cost(query.len()) <= threshold).then_some(alignment)
}

/// Computes the minimal semi-global distance and the window end achieving it.
///
/// `candidate` must not be empty.
fn best_end(query: &[char], candidate: &[char]) -> (usize, usize) {
    let mut prev = vec![0; candidate.len() + 1];
    let mut curr = vec![0; candidate.len() + 1];

    for (i, q) in query.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c) in candidate.iter().enumerate() {
            let diagonal = prev[j] + usize::from(q != c);
            curr[j + 1] = diagonal.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        mem::swap(&mut prev, &mut curr);
    }

    // Ties extend the first minimal run so the window takes in trailing matches.
    let mut best = (usize::MAX, 0);
    for (j, &d) in prev.iter().enumerate().skip(1) {
        if d < best.0 || (d == best.0 && j == best.1 + 1) {
            best = (d, j);
        }
    }
    best
}

/// Recovers the alignment of `query` ending at the last character of `slice`.
///
/// Returns the aligned window and the exactly matched positions, relative to `slice`.
fn backtrace(query: &[char], slice: &[char]) -> (Range<usize>, Vec<usize>) {
    let cols = slice.len() + 1;
    let mut table = vec![0; (query.len() + 1) * cols];
    for i in 1..=query.len() {
        table[i * cols] = i;
        for j in 1..cols {
            let diagonal = table[(i - 1) * cols + j - 1] + usize::from(query[i - 1] != slice[j - 1]);
            let up = table[(i - 1) * cols + j] + 1;
            let left = table[i * cols + j - 1] + 1;
            table[i * cols + j] = diagonal.min(up).min(left);
        }
    }

    let at = |i: usize, j: usize| table[i * cols + j];
    let (mut i, mut j) = (query.len(), slice.len());
    let mut matched = Vec::new();
    while i > 0 {
        let here = at(i, j);
        let same = j > 0 && query[i - 1] == slice[j - 1];
        if j > 0 && here == at(i - 1, j - 1) + usize::from(!same) {
            if same {
                matched.push(j - 1);
            }
            i -= 1;
            j -= 1;
        } else if j == 0 || here == at(i - 1, j) + 1 {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    matched.reverse();
    (j..slice.len(), matched)
}
