//! Search provider seam

use futures::future::BoxFuture;

use super::types::{SearchQuery, SearchResult};
use crate::errors::DocsError;

/// Backend that turns a domain-scoped query into ranked candidate URLs
///
/// Implementations make at most one outbound call per invocation and do
/// not retry; retry policy belongs to the caller.
pub trait SearchProvider: Send + Sync {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<SearchResult>, DocsError>>;

    /// Short name used in log fields
    fn name(&self) -> &'static str;
}
