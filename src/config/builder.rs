//! Type-safe builder for `DocsConfig` using the typestate pattern
//!
//! The API key is the only required value, so `build()` exists only after
//! [`DocsConfigBuilder::api_key`] has moved the builder into [`WithApiKey`].

use std::marker::PhantomData;
use std::path::PathBuf;
use std::time::Duration;

use super::types::{ConfigError, DocsConfig};
use crate::page_extractor::ExtractionRules;
use crate::utils::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_CHARS, DEFAULT_MAX_PAGE_BYTES, DEFAULT_MAX_REDIRECTS,
    DEFAULT_MAX_RESULTS, DEFAULT_PAGES_PER_QUERY, DEFAULT_SEARCH_ENDPOINT,
    DEFAULT_SEARCH_TIMEOUT_SECS, MAX_PAGES_PER_QUERY, MAX_TIMEOUT_SECS, MIN_MAX_CHARS,
};
use crate::web_search::MAX_RESULTS;

// Type states for the builder
pub struct WithApiKey;

pub struct DocsConfigBuilder<State = ()> {
    pub(crate) api_key: Option<String>,
    pub(crate) search_endpoint: String,
    pub(crate) log_file: Option<PathBuf>,
    pub(crate) max_results: usize,
    pub(crate) max_chars: usize,
    pub(crate) pages_per_query: usize,
    pub(crate) search_timeout_secs: u64,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) max_redirects: usize,
    pub(crate) max_page_bytes: usize,
    pub(crate) max_retries: u32,
    pub(crate) fallback_to_next: bool,
    pub(crate) extra_strip_selectors: Vec<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for DocsConfigBuilder<()> {
    fn default() -> Self {
        Self {
            api_key: None,
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            log_file: None,
            max_results: DEFAULT_MAX_RESULTS,
            max_chars: DEFAULT_MAX_CHARS,
            pages_per_query: DEFAULT_PAGES_PER_QUERY,
            search_timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_page_bytes: DEFAULT_MAX_PAGE_BYTES,
            max_retries: 0,
            fallback_to_next: false,
            extra_strip_selectors: Vec::new(),
            _phantom: PhantomData,
        }
    }
}

impl DocsConfig {
    /// Create a builder for configuring a `DocsConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> DocsConfigBuilder<()> {
        DocsConfigBuilder::default()
    }
}

impl DocsConfigBuilder<()> {
    pub fn api_key(self, key: impl Into<String>) -> DocsConfigBuilder<WithApiKey> {
        DocsConfigBuilder {
            api_key: Some(key.into()),
            search_endpoint: self.search_endpoint,
            log_file: self.log_file,
            max_results: self.max_results,
            max_chars: self.max_chars,
            pages_per_query: self.pages_per_query,
            search_timeout_secs: self.search_timeout_secs,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_redirects: self.max_redirects,
            max_page_bytes: self.max_page_bytes,
            max_retries: self.max_retries,
            fallback_to_next: self.fallback_to_next,
            extra_strip_selectors: self.extra_strip_selectors,
            _phantom: PhantomData,
        }
    }
}

fn check_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

// Build method only available once the API key is set
impl DocsConfigBuilder<WithApiKey> {
    /// Validate bounds and compile extraction rules
    ///
    /// # Errors
    /// - [`ConfigError::MissingApiKey`] if the key is blank
    /// - [`ConfigError::OutOfRange`] for a numeric setting outside its bounds
    /// - [`ConfigError::InvalidSelector`] for an unparseable strip selector
    pub fn build(self) -> Result<DocsConfig, ConfigError> {
        let api_key = self
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        check_range("max_results", self.max_results as u64, 1, MAX_RESULTS as u64)?;
        check_range("max_chars", self.max_chars as u64, MIN_MAX_CHARS as u64, u64::MAX)?;
        check_range(
            "pages_per_query",
            self.pages_per_query as u64,
            1,
            MAX_PAGES_PER_QUERY as u64,
        )?;
        check_range("search_timeout_secs", self.search_timeout_secs, 1, MAX_TIMEOUT_SECS)?;
        check_range("fetch_timeout_secs", self.fetch_timeout_secs, 1, MAX_TIMEOUT_SECS)?;

        if crate::utils::parse_http_url(&self.search_endpoint).is_none() {
            return Err(ConfigError::InvalidValue {
                var: crate::utils::ENV_SEARCH_ENDPOINT,
                value: self.search_endpoint,
                reason: "expected an absolute http(s) URL".to_string(),
            });
        }

        let extraction_rules =
            ExtractionRules::default().with_extra_strip_selectors(&self.extra_strip_selectors)?;

        Ok(DocsConfig {
            api_key,
            search_endpoint: self.search_endpoint,
            log_file: self.log_file,
            max_results: self.max_results,
            max_chars: self.max_chars,
            pages_per_query: self.pages_per_query,
            search_timeout: Duration::from_secs(self.search_timeout_secs),
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            max_redirects: self.max_redirects,
            max_page_bytes: self.max_page_bytes,
            max_retries: self.max_retries,
            fallback_to_next: self.fallback_to_next,
            extraction_rules,
        })
    }
}

// Builder methods available at any state
impl<State> DocsConfigBuilder<State> {
    /// Override the search provider endpoint (tests point this at a mock server)
    #[must_use]
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Number of search candidates requested from the provider (1..=10)
    #[must_use]
    pub fn max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    /// Character budget for the whole answer
    #[must_use]
    pub fn max_chars(mut self, n: usize) -> Self {
        self.max_chars = n;
        self
    }

    /// Number of candidate pages fetched and concatenated per query (1..=5)
    ///
    /// The character budget is split evenly between the fetched pages.
    ///
    /// # Example
    /// ```rust
    /// # use kodegen_tools_docs::config::DocsConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = DocsConfig::builder()
    ///     .api_key("serper-key")
    ///     .pages_per_query(2)
    ///     .build()?;
    /// assert_eq!(config.pages_per_query(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn pages_per_query(mut self, n: usize) -> Self {
        self.pages_per_query = n;
        self
    }

    #[must_use]
    pub fn search_timeout_secs(mut self, secs: u64) -> Self {
        self.search_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, n: usize) -> Self {
        self.max_redirects = n;
        self
    }

    #[must_use]
    pub fn max_page_bytes(mut self, bytes: usize) -> Self {
        self.max_page_bytes = bytes;
        self
    }

    /// Retries for transient search and fetch failures
    ///
    /// Set to 0 (the default) to fail on the first error.
    #[must_use]
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Continue with the next search candidate when a page cannot be read
    #[must_use]
    pub fn fallback_to_next(mut self, enabled: bool) -> Self {
        self.fallback_to_next = enabled;
        self
    }

    /// Additional CSS selectors removed before text extraction
    #[must_use]
    pub fn strip_selectors<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_strip_selectors
            .extend(selectors.into_iter().map(Into::into));
        self
    }
}
