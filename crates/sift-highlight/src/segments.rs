//! Splitting text into plain and highlighted segments.
//!
//! Spans should arrive sorted, non-overlapping, in range and on character boundaries. Input
//! that breaks those rules is repaired rather than rejected: ends past the text are clamped,
//! offsets inside a character widen to the enclosing character, and unsorted or
//! overlapping spans are sorted and merged. A warning is logged whenever a repair happens.
//! Either way the segments always cover the text exactly once.

use std::ops::Range;

use tracing::warn;

use crate::colors;

/// A run of text that is either highlighted or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of this run.
    pub text: &'a str,
    /// Whether the run is part of a match.
    pub highlighted: bool,
}

impl<'a> Segment<'a> {
    /// Creates a plain segment.
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            highlighted: false,
        }
    }

    /// Creates a highlighted segment.
    pub fn highlighted(text: &'a str) -> Self {
        Self {
            text,
            highlighted: true,
        }
    }
}

/// Splits `raw` into alternating plain and highlighted segments.
///
/// `spans` are byte ranges into `raw`. Concatenating the returned segments in order yields
/// `raw` unchanged. Empty text yields no segments.
pub fn render_highlights<I>(raw: &str, spans: I) -> Vec<Segment<'_>>
where
    I: IntoIterator<Item = Range<usize>>,
{
    let (spans, repaired) = sanitize(raw, spans);
    if repaired {
        warn!(text_len = raw.len(), "repaired invalid highlight spans");
    }

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            segments.push(Segment::plain(&raw[cursor..span.start]));
        }
        segments.push(Segment::highlighted(&raw[span.clone()]));
        cursor = span.end;
    }
    if cursor < raw.len() {
        segments.push(Segment::plain(&raw[cursor..]));
    }
    segments
}

/// Renders segments for a terminal, with matches in bold yellow.
pub fn paint(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.highlighted {
            out.push_str(colors::BOLD);
            out.push_str(colors::YELLOW);
            out.push_str(segment.text);
            out.push_str(colors::RESET);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// Highlights matches in `raw` for a terminal.
pub fn highlight_matches<I>(raw: &str, spans: I) -> String
where
    I: IntoIterator<Item = Range<usize>>,
{
    paint(&render_highlights(raw, spans))
}

/// Clamps, snaps, sorts and merges spans. Returns the clean spans and whether any repair
/// was needed.
fn sanitize<I>(raw: &str, spans: I) -> (Vec<Range<usize>>, bool)
where
    I: IntoIterator<Item = Range<usize>>,
{
    let mut repaired = false;
    let mut previous_end = 0;
    let mut clean = Vec::new();

    for span in spans {
        if span.start < previous_end {
            repaired = true;
        }
        previous_end = span.end;

        let start = floor_boundary(raw, span.start.min(raw.len()));
        let end = ceil_boundary(raw, span.end.min(raw.len()));
        if start != span.start || end != span.end || start >= end {
            repaired = true;
        }
        if start < end {
            clean.push(start..end);
        }
    }

    clean.sort_by_key(|r| r.start);
    let mut merged: Vec<Range<usize>> = Vec::with_capacity(clean.len());
    for span in clean {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }

    (merged, repaired)
}

/// Moves `i` back to the nearest character boundary.
fn floor_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Moves `i` forward to the nearest character boundary.
fn ceil_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
