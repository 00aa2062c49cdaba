//! Content-type gating and body decoding
//!
//! Only HTML-compatible and plain-text payloads are ever turned into text.
//! Everything else is rejected before parsing so binary data never leaks
//! into the caller's answer.

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// How a payload should be turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    PlainText,
}

const HTML_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];
const TEXT_TYPES: &[&str] = &["text/plain", "text/markdown", "text/x-markdown"];

/// Bytes inspected when sniffing a payload
const SNIFF_WINDOW: usize = 8 * 1024;

/// Share of control characters above which a payload counts as binary
const MAX_CONTROL_RATIO: f64 = 0.10;

/// Share of U+FFFD replacements above which lossy decoding is rejected
const MAX_REPLACEMENT_RATIO: f64 = 0.05;

// Matches both `<meta charset="x">` and `<meta http-equiv=... content="text/html; charset=x">`
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?([a-z0-9_\-:.]+)"#)
        .expect("BUG: hardcoded META_CHARSET_RE regex is invalid")
});

/// Lowercased MIME essence (`text/html; charset=utf-8` → `text/html`)
#[must_use]
pub fn mime_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Check a declared content type without looking at the body
///
/// A missing or empty header is accepted here and decided by sniffing
/// in [`classify`].
#[must_use]
pub fn is_supported_content_type(content_type: Option<&str>) -> bool {
    match content_type.map(mime_essence) {
        None => true,
        Some(essence) if essence.is_empty() => true,
        Some(essence) => {
            HTML_TYPES.contains(&essence.as_str()) || TEXT_TYPES.contains(&essence.as_str())
        }
    }
}

/// Decide how to treat a payload
///
/// Returns `Err(essence)` for unsupported declared types.
pub fn classify(content_type: Option<&str>, body: &[u8]) -> Result<ContentKind, String> {
    let essence = content_type.map(mime_essence).unwrap_or_default();

    if HTML_TYPES.contains(&essence.as_str()) {
        return Ok(ContentKind::Html);
    }
    if TEXT_TYPES.contains(&essence.as_str()) {
        return Ok(ContentKind::PlainText);
    }
    if !essence.is_empty() {
        return Err(essence);
    }

    // No declared type: sniff for markup
    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_WINDOW)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    let kind = if head.starts_with('<') {
        ContentKind::Html
    } else {
        ContentKind::PlainText
    };
    debug!("No content type declared, sniffed {kind:?}");
    Ok(kind)
}

/// `charset` parameter of a content-type header, if any
#[must_use]
pub fn charset_param(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Charset declared by a `<meta>` tag near the start of an HTML document
fn meta_charset(window: &[u8]) -> Option<String> {
    META_CHARSET_RE
        .captures(window)
        .and_then(|caps| caps.get(1))
        .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
}

/// Decode a text payload, rejecting binary data
///
/// The charset comes from the `Content-Type` header first, then from a
/// `<meta>` declaration. Without either the body is read as UTF-8.
///
/// Returns `Err(reason)` when the payload contains NUL bytes, is dominated
/// by control characters, or is undeclared and not recoverable as UTF-8.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> Result<String, String> {
    let window = &body[..body.len().min(SNIFF_WINDOW)];
    if window.contains(&0) {
        return Err("payload contains NUL bytes (binary data)".to_string());
    }

    if !window.is_empty() {
        let control = window
            .iter()
            .filter(|&&b| b < 0x20 && !matches!(b, b'\n' | b'\r' | b'\t' | 0x0c))
            .count();
        if control as f64 / window.len() as f64 > MAX_CONTROL_RATIO {
            return Err("payload is dominated by control characters (binary data)".to_string());
        }
    }

    let label = content_type
        .and_then(charset_param)
        .or_else(|| meta_charset(window));
    let encoding = label
        .as_deref()
        .and_then(|l| Encoding::for_label(l.as_bytes()));

    match encoding {
        Some(encoding) if encoding != UTF_8 => {
            debug!(charset = encoding.name(), "Decoding payload with declared charset");
            let (text, _, had_errors) = encoding.decode(body);
            if had_errors {
                debug!(charset = encoding.name(), "Payload had bytes invalid for its charset");
            }
            Ok(text.into_owned())
        }
        _ => decode_utf8(body),
    }
}

fn decode_utf8(body: &[u8]) -> Result<String, String> {
    match String::from_utf8(body.to_vec()) {
        Ok(text) => Ok(text),
        Err(_) => {
            let lossy = String::from_utf8_lossy(body);
            let total = lossy.chars().count().max(1);
            let replaced = lossy.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();
            if replaced as f64 / total as f64 > MAX_REPLACEMENT_RATIO {
                Err("payload is not valid UTF-8 text".to_string())
            } else {
                Ok(lossy.into_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_with_charset_is_html() {
        assert_eq!(
            classify(Some("text/html; charset=UTF-8"), b"<html></html>"),
            Ok(ContentKind::Html)
        );
    }

    #[test]
    fn pdf_is_rejected() {
        assert_eq!(
            classify(Some("application/pdf"), b"%PDF-1.7"),
            Err("application/pdf".to_string())
        );
        assert!(!is_supported_content_type(Some("application/pdf")));
    }

    #[test]
    fn missing_type_is_sniffed() {
        assert_eq!(classify(None, b"  <!doctype html><p>x</p>"), Ok(ContentKind::Html));
        assert_eq!(classify(Some(""), b"plain words"), Ok(ContentKind::PlainText));
        assert!(is_supported_content_type(None));
    }

    #[test]
    fn binary_is_rejected() {
        assert!(decode_body(&[0x89, b'P', b'N', b'G', 0x00, 0x01], None).is_err());
        assert!(decode_body(&[0x01, 0x02, 0x03, 0x04, b'a'], None).is_err());
    }

    #[test]
    fn mostly_valid_utf8_is_recovered() {
        let mut body = "documentation text ".repeat(10).into_bytes();
        body.push(0xff);
        let text = decode_body(&body, None).unwrap();
        assert!(text.starts_with("documentation text"));
    }

    #[test]
    fn charset_param_is_parsed() {
        assert_eq!(
            charset_param("text/html; charset=ISO-8859-1").as_deref(),
            Some("ISO-8859-1")
        );
        assert_eq!(
            charset_param(r#"text/html;Charset="windows-1252""#).as_deref(),
            Some("windows-1252")
        );
        assert_eq!(charset_param("text/html"), None);
    }

    #[test]
    fn header_charset_is_honoured() {
        let body = b"<p>Caf\xe9 documentation</p>";
        let text = decode_body(body, Some("text/html; charset=iso-8859-1")).unwrap();
        assert_eq!(text, "<p>Caf\u{e9} documentation</p>");
        assert!(!text.contains(char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn meta_charset_is_honoured() {
        let body = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93quoted\x94</body></html>";
        let text = decode_body(body, Some("text/html")).unwrap();
        assert!(text.contains("\u{201c}quoted\u{201d}"));

        let body = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\"><p>na\xefve</p>";
        let text = decode_body(body, None).unwrap();
        assert!(text.contains("na\u{ef}ve"));
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        let text = decode_body("résumé".as_bytes(), Some("text/html; charset=x-made-up")).unwrap();
        assert_eq!(text, "résumé");
    }
}
