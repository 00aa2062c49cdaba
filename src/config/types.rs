//! Core configuration types for the docs tool
//!
//! [`DocsConfig`] is built once at startup (see [`DocsConfig::builder`] and
//! [`DocsConfig::from_env`]) and shared read-only by every component.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::page_extractor::{ExtractionRules, InvalidSelector};

/// Process-wide configuration
#[derive(Clone)]
pub struct DocsConfig {
    /// Serper credential. Never logged; `Debug` redacts it.
    pub(crate) api_key: String,
    pub(crate) search_endpoint: String,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) max_results: usize,
    pub(crate) max_chars: usize,
    pub(crate) pages_per_query: usize,
    pub(crate) search_timeout: Duration,
    pub(crate) fetch_timeout: Duration,
    pub(crate) max_redirects: usize,
    pub(crate) max_page_bytes: usize,
    pub(crate) max_retries: u32,
    pub(crate) fallback_to_next: bool,
    pub(crate) extraction_rules: ExtractionRules,
}

impl fmt::Debug for DocsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsConfig")
            .field("api_key", &"<redacted>")
            .field("search_endpoint", &self.search_endpoint)
            .field("log_file", &self.log_file)
            .field("max_results", &self.max_results)
            .field("max_chars", &self.max_chars)
            .field("pages_per_query", &self.pages_per_query)
            .field("search_timeout", &self.search_timeout)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("max_redirects", &self.max_redirects)
            .field("max_page_bytes", &self.max_page_bytes)
            .field("max_retries", &self.max_retries)
            .field("fallback_to_next", &self.fallback_to_next)
            .finish_non_exhaustive()
    }
}

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("SERPER_API_KEY is not set; the documentation tool cannot search without it")]
    MissingApiKey,

    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{field} = {value} is out of range ({min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error(transparent)]
    InvalidSelector(#[from] InvalidSelector),
}
