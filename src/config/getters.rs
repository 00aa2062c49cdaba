//! Getter methods for `DocsConfig`

use std::path::Path;
use std::time::Duration;

use super::types::DocsConfig;
use crate::page_extractor::ExtractionRules;

impl DocsConfig {
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    #[must_use]
    pub fn pages_per_query(&self) -> usize {
        self.pages_per_query
    }

    #[must_use]
    pub fn search_timeout(&self) -> Duration {
        self.search_timeout
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }

    #[must_use]
    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    #[must_use]
    pub fn max_page_bytes(&self) -> usize {
        self.max_page_bytes
    }

    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    #[must_use]
    pub fn fallback_to_next(&self) -> bool {
        self.fallback_to_next
    }

    #[must_use]
    pub fn extraction_rules(&self) -> &ExtractionRules {
        &self.extraction_rules
    }
}
