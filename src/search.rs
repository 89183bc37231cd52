//! Free-text search over parsed index entries.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Join the user's tokens with single spaces and compile them as a
/// case-insensitive pattern. The tokens may contain regex syntax; a pattern
/// that fails to compile is reported to the caller, never a panic.
pub fn compile_query(tokens: &[String]) -> Result<Regex> {
    let pattern = tokens.join(" ");
    Ok(RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()?)
}

/// Filter entries down to those the query matches, keeping parser order.
/// No ranking, no fuzzy matching.
pub fn search<'a>(entries: &[&'a str], query: &Regex) -> Vec<&'a str> {
    entries
        .iter()
        .copied()
        .filter(|entry| query.is_match(entry))
        .collect()
}
