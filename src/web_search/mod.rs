//! Search Gateway
//!
//! Sends a domain-scoped query to the configured search provider and
//! returns ranked candidate URLs. The provider is a trait object so the
//! pipeline can run against Serper in production and fakes in tests.

mod provider;
mod serper;
mod types;

// Re-export public types
pub use provider::SearchProvider;
pub use serper::SerperProvider;
pub use types::{MAX_QUERY_LENGTH, MAX_RESULTS, SearchQuery, SearchResult, SearchResults};

use tracing::{debug, info};

use crate::errors::DocsError;
use crate::utils::is_valid_url;

/// Search `scoped_domain` for `query_text`
///
/// Validates the request before any network call, drops results whose URL
/// is not absolute http(s), keeps provider order, and returns at most
/// `max_results` results. An empty result set is not an error.
///
/// # Errors
/// - [`DocsError::InvalidArgument`] for an invalid query, domain or `max_results`
/// - provider errors ([`DocsError::Authentication`], [`DocsError::ProviderUnavailable`])
pub async fn search(
    provider: &dyn SearchProvider,
    query_text: &str,
    scoped_domain: &str,
    max_results: usize,
) -> Result<SearchResults, DocsError> {
    if !(1..=MAX_RESULTS).contains(&max_results) {
        return Err(DocsError::InvalidArgument(format!(
            "max_results must be between 1 and {MAX_RESULTS}, got {max_results}"
        )));
    }
    let query = SearchQuery::new(query_text, scoped_domain)?;

    info!(
        provider = provider.name(),
        query = %query.raw_text(),
        domain = %query.scoped_domain(),
        "Starting documentation search"
    );

    let raw = provider.search(&query, max_results).await?;
    let results = filter_results(raw, max_results);

    info!(
        provider = provider.name(),
        results = results.len(),
        "Search completed"
    );
    Ok(SearchResults::new(query.raw_text().to_string(), results))
}

/// Drop invalid URLs, cap the count, and re-rank 1..=n in provider order
fn filter_results(raw: Vec<SearchResult>, max_results: usize) -> Vec<SearchResult> {
    raw.into_iter()
        .filter(|r| {
            let valid = is_valid_url(&r.url);
            if !valid {
                debug!(url = %r.url, "Dropping search result with invalid URL");
            }
            valid
        })
        .take(max_results)
        .enumerate()
        .map(|(i, r)| SearchResult { rank: i + 1, ..r })
        .collect()
}
