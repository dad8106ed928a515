//! Word tokenization over normalized text.

use std::ops::Range;

use crate::NormalizedText;

/// A word in normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word itself.
    pub text: String,
    /// Position of the word, in normalized characters.
    pub chars: Range<usize>,
}

impl Token {
    /// Length of the word in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True for zero-length tokens (never produced by [`tokenize`]).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Splits normalized text into whitespace-separated words.
///
/// Because normalization collapses whitespace, words are separated by exactly one space.
pub fn tokenize(text: &NormalizedText) -> Vec<Token> {
    let chars = text.chars();
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, ch) in chars.iter().enumerate() {
        if *ch == ' ' {
            if i > start {
                tokens.push(make_token(chars, start..i));
            }
            start = i + 1;
        }
    }
    if chars.len() > start {
        tokens.push(make_token(chars, start..chars.len()));
    }

    tokens
}

/// Builds a token from a character range.
fn make_token(chars: &[char], range: Range<usize>) -> Token {
    Token {
        text: chars[range.clone()].iter().collect(),
        chars: range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(raw: &str) -> Vec<String> {
        tokenize(&NormalizedText::new(raw))
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(words("Complete  project\tproposal"), vec!["complete", "project", "proposal"]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn single_word() {
        let tokens = tokenize(&NormalizedText::new("Important"));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].chars, 0..9);
    }

    #[test]
    fn token_positions_index_normalized_chars() {
        let text = NormalizedText::new("Work Tasks");
        let tokens = tokenize(&text);
        assert_eq!(tokens[1].chars, 5..10);
        let raw = text.raw_range(tokens[1].chars.clone()).unwrap();
        assert_eq!(&"Work Tasks"[raw], "Tasks");
    }
}
