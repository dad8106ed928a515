//! Configuration template for `sift init`.
//!
//! The template is the default configuration rendered as TOML, every line commented out, with
//! a short note in front of the settings and the field declarations.

use crate::Config;

/// Opening lines of the template.
const PREAMBLE: &str = "\
# sift configuration
#
# Every value below is a default. Uncomment a line to change it.
";

/// Note placed before the `[settings]` table.
const SETTINGS_NOTE: &str = "\
# Settings apply to every search. Thresholds are match costs from 0 (exact) to 1.
";

/// Note placed before the first field declaration.
const FIELDS_NOTE: &str = "\
# Searchable fields per entity kind, in order. A field's cost is divided by its
# weight, so a weight of 2 accepts twice the typos of a weight of 1. Declaring any
# field for a kind replaces all of that kind's defaults.
";

/// Returns the local configuration template.
pub fn local_template() -> String {
    let defaults = Config::default().settings_to_toml();
    let mut out = String::from(PREAMBLE);
    let mut fields_noted = false;

    for line in defaults.lines() {
        if line == "[settings]" {
            out.push('\n');
            out.push_str(SETTINGS_NOTE);
        } else if line.starts_with("[[fields.") && !fields_noted {
            out.push_str(FIELDS_NOTE);
            fields_noted = true;
        }
        if !line.is_empty() {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
