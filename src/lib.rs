pub mod config;
pub mod errors;
pub mod library;
pub mod mcp;
pub mod page_extractor;
pub mod pipeline;
pub mod utils;
pub mod web_search;

pub use config::{ConfigError, DocsConfig};
pub use errors::{DocsError, DocsResult, ErrorKind};
pub use library::{Library, LibraryEntry};
pub use mcp::{DocsServer, GetDocsArgs};
pub use page_extractor::{
    ContentExtractor, ExtractedDocument, ExtractionRules, FetchedPage, HttpPageFetcher,
    PageFetcher,
};
pub use pipeline::{DocsOutcome, DocsPipeline, RetryConfig};
pub use web_search::{SearchProvider, SearchQuery, SearchResult, SearchResults, SerperProvider};

/// Resolve, search, fetch and extract in one call
///
/// Convenience wrapper for one-off lookups; long-running servers should
/// build a [`DocsPipeline`] once and share it.
///
/// # Errors
/// Returns [`DocsError::Initialization`] if the HTTP clients cannot be built.
pub async fn get_docs(config: DocsConfig, query: &str, library: &str) -> DocsResult<String> {
    let pipeline = DocsPipeline::from_config(config)?;
    Ok(pipeline.get_docs(query, library).await)
}
