//! Offset-preserving text normalization.

use std::ops::Range;

/// Case-folds a single character.
///
/// Folding is ordinal and locale-insensitive. Characters whose lowercase form expands to
/// more than one character (for example `'İ'`) are kept as they are, so one input
/// character always yields exactly one normalized character.
pub fn fold_char(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Normalizes text for matching: case-folds, collapses whitespace runs, and trims.
///
/// Empty and all-whitespace input normalizes to the empty string.
pub fn normalize(text: &str) -> String {
    NormalizedText::new(text).text()
}

/// Normalized text that remembers where each character came from.
///
/// Every normalized character carries the byte range of the raw text it was produced from.
/// Regular characters map to themselves; a collapsed whitespace run maps to the whole run.
/// Ranges are increasing and never overlap, so any run of normalized characters maps to a
/// valid, character-aligned byte range of the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Normalized characters.
    chars: Vec<char>,
    /// Raw byte range for each entry in `chars`.
    sources: Vec<Range<usize>>,
}

impl NormalizedText {
    /// Normalizes `raw` in full.
    pub fn new(raw: &str) -> Self {
        Self::truncated(raw, usize::MAX)
    }

    /// Normalizes `raw`, keeping at most `max_chars` normalized characters.
    pub fn truncated(raw: &str, max_chars: usize) -> Self {
        let mut chars = Vec::new();
        let mut sources = Vec::new();
        let mut pending_space: Option<Range<usize>> = None;

        for (offset, ch) in raw.char_indices() {
            if chars.len() >= max_chars {
                break;
            }
            let end = offset + ch.len_utf8();

            if ch.is_whitespace() {
                match pending_space.as_mut() {
                    Some(run) => run.end = end,
                    None => pending_space = Some(offset..end),
                }
                continue;
            }

            // Leading whitespace is dropped; interior runs become one space.
            if let Some(run) = pending_space.take()
                && !chars.is_empty()
            {
                chars.push(' ');
                sources.push(run);
                if chars.len() >= max_chars {
                    break;
                }
            }

            chars.push(fold_char(ch));
            sources.push(offset..end);
        }

        Self { chars, sources }
    }

    /// Returns the normalized characters.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of normalized characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when nothing survived normalization.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the normalized text as a string.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Maps a range of normalized characters back to a byte range of the raw text.
    ///
    /// Returns `None` for empty or out-of-bounds ranges.
    pub fn raw_range(&self, chars: Range<usize>) -> Option<Range<usize>> {
        if chars.start >= chars.end || chars.end > self.sources.len() {
            return None;
        }
        Some(self.sources[chars.start].start..self.sources[chars.end - 1].end)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Complete   PROJECT\tproposal\n"), "complete project proposal");
    }

    #[test]
    fn empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
        assert!(NormalizedText::new("   ").is_empty());
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(normalize("Q3: Re-plan!"), "q3: re-plan!");
    }

    #[test]
    fn maps_words_back_to_raw_bytes() {
        let raw = "  Work   Tasks ";
        let text = NormalizedText::new(raw);
        assert_eq!(text.text(), "work tasks");
        assert_eq!(text.raw_range(0..4), Some(2..6));
        assert_eq!(&raw[text.raw_range(5..10).unwrap()], "Tasks");
    }

    #[test]
    fn collapsed_space_covers_whole_run() {
        let raw = "a \t b";
        let text = NormalizedText::new(raw);
        assert_eq!(text.text(), "a b");
        assert_eq!(text.raw_range(1..2), Some(1..4));
        assert_eq!(text.raw_range(0..3), Some(0..5));
    }

    #[test]
    fn multibyte_characters_keep_byte_offsets() {
        let raw = "Café Über";
        let text = NormalizedText::new(raw);
        assert_eq!(text.text(), "café über");
        let range = text.raw_range(5..9).unwrap();
        assert_eq!(&raw[range], "Über");
    }

    #[test]
    fn expanding_lowercase_is_kept_verbatim() {
        // 'İ' lowercases to two characters; it must stay one.
        assert_eq!(fold_char('İ'), 'İ');
        assert_eq!(normalize("İstanbul").chars().count(), 8);
        assert_eq!(fold_char('Ä'), 'ä');
    }

    #[test]
    fn truncation_limits_characters() {
        let text = NormalizedText::truncated("Hello   World", 7);
        assert_eq!(text.text(), "hello w");
        assert_eq!(text.len(), 7);
    }

    #[test]
    fn raw_range_rejects_bad_ranges() {
        let text = NormalizedText::new("abc");
        assert_eq!(text.raw_range(2..2), None);
        assert_eq!(text.raw_range(1..4), None);
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn every_character_maps_to_raw_text(s in "[a-zA-Zé \\t]{0,30}") {
            let text = NormalizedText::new(&s);
            for i in 0..text.len() {
                let range = text.raw_range(i..i + 1).unwrap();
                prop_assert!(s.is_char_boundary(range.start));
                prop_assert!(s.is_char_boundary(range.end));
                prop_assert!(range.end <= s.len());
                let source = &s[range];
                if text.chars()[i] == ' ' {
                    prop_assert!(source.chars().all(char::is_whitespace));
                } else {
                    prop_assert_eq!(source.chars().count(), 1);
                }
            }
        }
    }
}
