//! UTF-8-safe string truncation utilities
//!
//! Truncation works on characters, never bytes, so multi-byte text
//! (box-drawing symbols, CJK, emoji) can never cause a slicing panic.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use kodegen_tools_docs::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("🎉🎊🎈", 2), "🎉🎊");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Truncate at the last whitespace boundary within `max_chars` characters.
///
/// Returns the truncated slice (trailing whitespace trimmed) and whether
/// anything was cut. When the text fits it is returned unchanged. When no
/// whitespace exists inside the window the text is cut hard at
/// `max_chars`, which is still reported as truncated.
///
/// # Examples
/// ```
/// # use kodegen_tools_docs::utils::string_utils::truncate_at_word_boundary;
/// let (text, truncated) = truncate_at_word_boundary("Hello, wonderful world of Unicode!", 20);
/// assert_eq!(text, "Hello, wonderful");
/// assert!(truncated);
///
/// let (text, truncated) = truncate_at_word_boundary("short", 20);
/// assert_eq!(text, "short");
/// assert!(!truncated);
/// ```
#[must_use]
pub fn truncate_at_word_boundary(s: &str, max_chars: usize) -> (&str, bool) {
    let Some((max_byte_idx, next_char)) = s.char_indices().nth(max_chars) else {
        return (s, false);
    };

    // The window ends exactly on a word boundary
    if next_char.is_whitespace() {
        let cut = s[..max_byte_idx].trim_end();
        if !cut.is_empty() {
            return (cut, true);
        }
    }

    let window = &s[..max_byte_idx];
    let cut = window
        .rfind(char::is_whitespace)
        .map(|idx| window[..idx].trim_end())
        .filter(|cut| !cut.is_empty())
        .unwrap_or(window);

    (cut, true)
}
