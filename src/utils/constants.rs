//! Shared configuration constants for the docs tool
//!
//! Default values and environment variable names used across the
//! registry, search gateway and content extractor.

/// Chrome user agent string for documentation fetches
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Several documentation hosts reject requests with an empty or
/// library-default agent, so page fetches always present a browser agent.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// User agent for search provider API calls
pub const API_USER_AGENT: &str = concat!("kodegen-docs/", env!("CARGO_PKG_VERSION"));

/// Serper search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://google.serper.dev/search";

/// Default number of search candidates requested per query
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Default character budget for the returned documentation text
///
/// Roughly 2k tokens: large enough for a full API section, small enough
/// to leave room in the caller's context window.
pub const DEFAULT_MAX_CHARS: usize = 8_000;

/// Smallest accepted character budget
pub const MIN_MAX_CHARS: usize = 200;

/// Default number of candidate pages fetched per query
pub const DEFAULT_PAGES_PER_QUERY: usize = 1;

/// Upper bound on candidate pages fetched per query
pub const MAX_PAGES_PER_QUERY: usize = 5;

/// Default timeout for search provider calls (seconds)
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 8;

/// Default timeout for documentation page fetches (seconds)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 8;

/// Upper bound for either timeout (seconds)
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// Maximum redirects followed when fetching a documentation page
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Response size ceiling for documentation pages: 5 MiB
pub const DEFAULT_MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

// Environment variables read by `DocsConfig::from_env`

pub const ENV_API_KEY: &str = "SERPER_API_KEY";
pub const ENV_SEARCH_ENDPOINT: &str = "DOCS_SEARCH_ENDPOINT";
pub const ENV_LOG_FILE: &str = "DOCS_LOG_FILE";
pub const ENV_MAX_RESULTS: &str = "DOCS_MAX_RESULTS";
pub const ENV_MAX_CHARS: &str = "DOCS_MAX_CHARS";
pub const ENV_PAGES_PER_QUERY: &str = "DOCS_PAGES_PER_QUERY";
pub const ENV_SEARCH_TIMEOUT_SECS: &str = "DOCS_SEARCH_TIMEOUT_SECS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "DOCS_FETCH_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "DOCS_MAX_RETRIES";
pub const ENV_FALLBACK_TO_NEXT: &str = "DOCS_FALLBACK_TO_NEXT";
pub const ENV_STRIP_SELECTORS: &str = "DOCS_STRIP_SELECTORS";
