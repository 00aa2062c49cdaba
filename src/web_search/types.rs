//! Data structures and constants for web search functionality

use crate::errors::DocsError;

// =============================================================================
// Constants
// =============================================================================

/// Maximum query length in characters
pub const MAX_QUERY_LENGTH: usize = 500;

/// Maximum number of results to request from the provider
pub const MAX_RESULTS: usize = 10;

// =============================================================================
// Data Structures
// =============================================================================

/// A validated, domain-scoped search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw_text: String,
    scoped_domain: String,
}

impl SearchQuery {
    /// Validate and build a query
    ///
    /// # Errors
    /// Returns [`DocsError::InvalidArgument`] for an empty or overlong query
    /// or an empty domain.
    pub fn new(raw_text: &str, scoped_domain: &str) -> Result<Self, DocsError> {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return Err(DocsError::InvalidArgument(
                "query must not be empty".to_string(),
            ));
        }
        let length = trimmed.chars().count();
        if length > MAX_QUERY_LENGTH {
            return Err(DocsError::InvalidArgument(format!(
                "query is {length} characters long; the limit is {MAX_QUERY_LENGTH}"
            )));
        }
        let domain = scoped_domain.trim();
        if domain.is_empty() {
            return Err(DocsError::InvalidArgument(
                "search domain must not be empty".to_string(),
            ));
        }
        Ok(Self {
            raw_text: trimmed.to_string(),
            scoped_domain: domain.to_string(),
        })
    }

    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    #[must_use]
    pub fn scoped_domain(&self) -> &str {
        &self.scoped_domain
    }

    /// Text sent to the provider, restricted to the documentation domain
    #[must_use]
    pub fn provider_query(&self) -> String {
        format!("site:{} {}", self.scoped_domain, self.raw_text)
    }
}

/// A single search result with rank, title, URL, and snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Result ranking (1-indexed)
    pub rank: usize,

    /// Page title
    pub title: String,

    /// Absolute http(s) URL
    pub url: String,

    /// Description snippet from search results
    pub snippet: Option<String>,
}

/// Collection of search results
#[derive(Debug, Clone)]
pub struct SearchResults {
    /// Search query that produced these results
    pub query: String,

    /// Results in provider order
    pub results: Vec<SearchResult>,
}

impl SearchResults {
    /// Create new `SearchResults`
    #[must_use]
    pub fn new(query: String, results: Vec<SearchResult>) -> Self {
        Self { query, results }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
