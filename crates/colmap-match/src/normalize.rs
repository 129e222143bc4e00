//! Text normalization for header and alias comparison.

use std::collections::BTreeSet;

/// Canonicalize a string for comparison.
///
/// Lowercases, drops everything except ASCII letters, digits and whitespace,
/// collapses whitespace runs to a single space and trims. Total and
/// idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// Separators are removed rather than turned into spaces, so
/// `"Student_Name"` becomes `"studentname"`.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unique words of an already-normalized string, ignoring one-letter tokens.
pub fn word_set(normalized: &str) -> BTreeSet<&str> {
    normalized
        .split(' ')
        .filter(|token| token.len() > 1)
        .collect()
}

/// Turn a header row with missing cells into plain strings.
///
/// Missing headers become empty strings so column indices stay aligned.
pub fn coalesce_headers<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    headers
        .into_iter()
        .map(|header| header.map(Into::into).unwrap_or_default())
        .collect()
}
