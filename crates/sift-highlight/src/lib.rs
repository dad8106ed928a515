//! Match highlighting and terminal styling for sift.
//!
//! This crate turns match spans from a search into plain and highlighted segments of the
//! original text, and provides styled terminal output for result listings and
//! syntax-highlighted configuration.

#![warn(missing_docs)]

mod segments;
mod style;
mod syntax;

pub use segments::{Segment, highlight_matches, paint, render_highlights};
pub use style::{colors, dim, error, header, rule, subheader, success, warning};
pub use syntax::{Highlighter, Language};
