//! Syntax highlighting for configuration and JSON output.

use syntect::{
    easy::HighlightLines,
    highlighting::Theme,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedThemeName, extra as extra_themes},
};

use crate::colors;

/// Structured formats sift prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    /// Configuration files and `sift config` output.
    Toml,
    /// `--json` output.
    Json,
}

impl Language {
    /// File extension the syntax definition is registered under.
    fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// Syntax definitions and the theme used to color them.
struct Palette {
    /// Language definitions, including TOML from the two-face extras.
    syntaxes: SyntaxSet,
    /// Resolved color theme.
    theme: Theme,
}

/// Colors TOML and JSON for a terminal.
///
/// A plain highlighter returns text untouched, for output that is piped or redirected.
pub struct Highlighter {
    /// `None` when highlighting is off.
    palette: Option<Palette>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a coloring highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            palette: Some(Palette {
                syntaxes: extra_syntaxes(),
                theme: extra_themes().get(EmbeddedThemeName::Dracula).clone(),
            }),
        }
    }

    /// Creates a highlighter that never adds escape codes.
    pub fn plain() -> Self {
        Self { palette: None }
    }

    /// Colors only when output goes to a terminal.
    pub fn for_terminal(is_terminal: bool) -> Self {
        if is_terminal {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Whether this highlighter leaves text untouched.
    pub fn is_plain(&self) -> bool {
        self.palette.is_none()
    }

    /// Colors `content` as `language`.
    ///
    /// Colored output ends with a reset. Lines the highlighter cannot parse are kept as is.
    pub fn paint(&self, content: &str, language: Language) -> String {
        let Some(palette) = &self.palette else {
            return content.to_string();
        };
        let Some(syntax) = palette
            .syntaxes
            .find_syntax_by_extension(language.extension())
        else {
            return content.to_string();
        };

        let mut lines = HighlightLines::new(syntax, &palette.theme);
        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            match lines.highlight_line(line, &palette.syntaxes) {
                Ok(ranges) => output.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => output.push_str(line),
            }
        }
        output.push_str(colors::RESET);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Removes SGR escape sequences.
    fn strip_ansi(input: &str) -> String {
        let mut out = String::new();
        let mut chars = input.chars();
        while let Some(ch) = chars.next() {
            if ch == '\u{1b}' {
                chars.by_ref().find(|c| *c == 'm');
            } else {
                out.push(ch);
            }
        }
        out
    }

    const SETTINGS: &str = "[settings]\nthreshold = 0.4\npriority = [\"tag\"]\n";

    #[test]
    fn toml_is_colored_without_changing_text() {
        let painted = Highlighter::new().paint(SETTINGS, Language::Toml);
        assert!(painted.contains("\x1b[38;2;"));
        assert!(painted.ends_with(colors::RESET));
        assert_eq!(strip_ansi(&painted), SETTINGS);
    }

    #[test]
    fn json_is_colored_without_changing_text() {
        let json = "{\n  \"total\": 1,\n  \"ranked\": []\n}\n";
        let painted = Highlighter::new().paint(json, Language::Json);
        assert!(painted.contains("\x1b[38;2;"));
        assert_eq!(strip_ansi(&painted), json);
    }

    #[test]
    fn plain_passes_text_through() {
        let hl = Highlighter::for_terminal(false);
        assert!(hl.is_plain());
        assert_eq!(hl.paint(SETTINGS, Language::Toml), SETTINGS);
    }

    #[test]
    fn every_language_has_a_syntax() {
        let syntaxes = extra_syntaxes();
        for language in [Language::Toml, Language::Json] {
            assert!(
                syntaxes
                    .find_syntax_by_extension(language.extension())
                    .is_some(),
                "{language:?}"
            );
        }
    }
}
