//! URL validation helpers.

use url::Url;

/// Check if a URL is a valid absolute http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    parse_http_url(url).is_some()
}

/// Parse an absolute http(s) URL, rejecting every other scheme
///
/// Data, javascript and mailto links as well as relative references
/// return `None`.
#[must_use]
pub fn parse_http_url(url: &str) -> Option<Url> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Some(parsed)
        }
        _ => None,
    }
}
