//! Whitespace normalization for extracted text.

use regex::Regex;
use std::sync::LazyLock;

// Any whitespace run that does not contain a newline
static INLINE_WS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").expect("INLINE_WS_RE: hardcoded regex is valid"));

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_LINES_RE: hardcoded regex is valid"));

/// Collapse whitespace into a dense, readable block
///
/// - runs of spaces, tabs and other non-newline whitespace become one space
/// - every line is trimmed
/// - more than one consecutive blank line becomes a single blank line
/// - leading and trailing blank lines are removed
///
/// The function is idempotent.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = INLINE_WS_RE.replace_all(text, " ");
    let trimmed_lines = collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    BLANK_LINES_RE
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}
