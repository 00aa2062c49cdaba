//! Fetch-and-clean pipeline stage

use std::sync::Arc;
use tracing::{debug, info};

use super::content_type::{ContentKind, classify, decode_body};
use super::fetcher::PageFetcher;
use super::rules::ExtractionRules;
use super::text_extraction::extract_text;
use super::types::{ExtractedDocument, FetchedPage};
use super::whitespace::normalize_whitespace;
use crate::errors::DocsError;
use crate::utils::{is_valid_url, truncate_at_word_boundary};

/// Turns a documentation URL into bounded plain text
#[derive(Clone)]
pub struct ContentExtractor {
    fetcher: Arc<dyn PageFetcher>,
    rules: ExtractionRules,
}

impl ContentExtractor {
    #[must_use]
    pub fn new(fetcher: Arc<dyn PageFetcher>, rules: ExtractionRules) -> Self {
        Self { fetcher, rules }
    }

    #[must_use]
    pub fn rules(&self) -> &ExtractionRules {
        &self.rules
    }

    /// Fetch `url` and extract at most `max_chars` characters of main content
    ///
    /// # Errors
    /// - [`DocsError::InvalidArgument`] for a non-http(s) URL or a zero budget
    /// - [`DocsError::Fetch`] for network failures, timeouts and non-2xx responses
    /// - [`DocsError::UnsupportedContentType`] for non-HTML payloads
    /// - [`DocsError::Parse`] for binary or text-free payloads
    pub async fn extract(&self, url: &str, max_chars: usize) -> Result<ExtractedDocument, DocsError> {
        if !is_valid_url(url) {
            return Err(DocsError::InvalidArgument(format!(
                "'{url}' is not an absolute http(s) URL"
            )));
        }
        if max_chars == 0 {
            return Err(DocsError::InvalidArgument(
                "max_chars must be positive".to_string(),
            ));
        }

        let page = self.fetcher.fetch(url).await?;
        let document = process_page(page, &self.rules, max_chars)?;

        info!(
            url = %document.source_url,
            chars = document.text.chars().count(),
            truncated = document.truncated,
            "Extracted documentation text"
        );
        Ok(document)
    }
}

/// Turn a fetched page into an [`ExtractedDocument`]
///
/// Pure: the same page and rules always produce the same document.
///
/// # Errors
/// See [`ContentExtractor::extract`].
pub fn process_page(
    page: FetchedPage,
    rules: &ExtractionRules,
    max_chars: usize,
) -> Result<ExtractedDocument, DocsError> {
    let kind = classify(page.content_type.as_deref(), &page.body).map_err(|content_type| {
        DocsError::UnsupportedContentType {
            url: page.url.clone(),
            content_type,
        }
    })?;

    let source = decode_body(&page.body, page.content_type.as_deref()).map_err(|reason| DocsError::Parse {
        url: page.url.clone(),
        reason,
    })?;

    let (title, text) = match kind {
        ContentKind::Html => {
            let extracted = extract_text(&source, rules);
            (extracted.title, extracted.text)
        }
        ContentKind::PlainText => (None, normalize_whitespace(&source)),
    };

    if text.is_empty() {
        return Err(DocsError::Parse {
            url: page.url,
            reason: "no readable text found".to_string(),
        });
    }

    let (bounded, truncated) = truncate_at_word_boundary(&text, max_chars);
    if truncated {
        debug!(
            url = %page.url,
            original_chars = text.chars().count(),
            max_chars,
            "Truncated extracted text"
        );
    }

    Ok(ExtractedDocument {
        source_url: page.url,
        title,
        text: bounded.to_string(),
        truncated,
    })
}
