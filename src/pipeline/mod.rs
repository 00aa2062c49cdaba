//! Orchestration: `ResolveLibrary → Search → Fetch&Extract → Respond`
//!
//! [`DocsPipeline::get_docs`] is the only entry point the tool surface
//! uses. It never returns an error: every failure becomes a short message
//! via [`DocsOutcome::render`], and is logged with its library, query and
//! failing URL.

mod outcome;
mod retry;

pub use outcome::DocsOutcome;
pub use retry::{RetryConfig, retry_with_backoff};

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::DocsConfig;
use crate::errors::DocsError;
use crate::library::{self, LibraryEntry};
use crate::page_extractor::{ContentExtractor, HttpPageFetcher, PageFetcher};
use crate::web_search::{self, SearchProvider, SerperProvider};

/// Shared, immutable request pipeline
#[derive(Clone)]
pub struct DocsPipeline {
    config: Arc<DocsConfig>,
    provider: Arc<dyn SearchProvider>,
    extractor: ContentExtractor,
    retry: RetryConfig,
}

impl DocsPipeline {
    /// Production wiring: Serper search and HTTP page fetches
    ///
    /// # Errors
    /// Returns [`DocsError::Initialization`] if an HTTP client cannot be built.
    pub fn from_config(config: DocsConfig) -> Result<Self, DocsError> {
        let provider = Arc::new(SerperProvider::new(&config)?);
        let fetcher = Arc::new(HttpPageFetcher::new(&config)?);
        Ok(Self::new(config, provider, fetcher))
    }

    #[must_use]
    pub fn new(
        config: DocsConfig,
        provider: Arc<dyn SearchProvider>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        let extractor = ContentExtractor::new(fetcher, config.extraction_rules().clone());
        let retry = RetryConfig::with_max_retries(config.max_retries());
        Self {
            config: Arc::new(config),
            provider,
            extractor,
            retry,
        }
    }

    /// Replace the backoff schedule (`max_retries` included)
    #[must_use]
    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    #[must_use]
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Answer a `get_docs` call with documentation text or an error message
    pub async fn get_docs(&self, query: &str, library: &str) -> String {
        self.run(query, library).await.render()
    }

    /// Run the pipeline and return the typed outcome
    pub async fn run(&self, query: &str, library: &str) -> DocsOutcome {
        let outcome = match library::resolve(library) {
            Ok(entry) => match self.lookup(query, entry).await {
                Ok(outcome) => outcome,
                Err(e) => DocsOutcome::Failed(e),
            },
            Err(e) => DocsOutcome::Failed(e),
        };

        if let DocsOutcome::Failed(error) = &outcome {
            warn!(
                library,
                query,
                kind = error.kind().as_str(),
                error = %error,
                "get_docs failed"
            );
        }
        outcome
    }

    async fn lookup(&self, query: &str, entry: &LibraryEntry) -> Result<DocsOutcome, DocsError> {
        let provider = self.provider.as_ref();
        let max_results = self.config.max_results();
        let results = retry_with_backoff(&self.retry, "search", || {
            web_search::search(provider, query, entry.docs_domain, max_results)
        })
        .await?;

        if results.is_empty() {
            info!(library = entry.identifier, query, "No search results");
            return Ok(DocsOutcome::NoResults {
                library: entry.library,
                query: results.query,
            });
        }

        let pages = self.config.pages_per_query();
        let budget = self.config.max_chars() / pages;
        // Without fallback only the first `pages` candidates are tried
        let candidates = if self.config.fallback_to_next() {
            results.results.len()
        } else {
            pages
        };

        let extractor = &self.extractor;
        let mut documents = Vec::with_capacity(pages);
        let mut last_error = None;
        for candidate in results.results.iter().take(candidates) {
            if documents.len() == pages {
                break;
            }
            let extracted = retry_with_backoff(&self.retry, "extract", || {
                extractor.extract(&candidate.url, budget)
            })
            .await;

            match extracted {
                Ok(doc) => documents.push(doc),
                Err(e) if is_candidate_failure(&e) => {
                    warn!(
                        library = entry.identifier,
                        query,
                        url = %candidate.url,
                        rank = candidate.rank,
                        kind = e.kind().as_str(),
                        error = %e,
                        "Candidate page could not be read"
                    );
                    // Without fallback any candidate failure ends the request
                    if !self.config.fallback_to_next() {
                        return Err(e);
                    }
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        if documents.is_empty() {
            return Err(last_error.unwrap_or_else(|| {
                DocsError::InvalidArgument("no candidate pages were fetched".to_string())
            }));
        }

        info!(
            library = entry.identifier,
            query,
            pages = documents.len(),
            "Documentation found"
        );
        Ok(DocsOutcome::Found {
            library: entry.library,
            documents,
        })
    }
}

/// Errors tied to one candidate page rather than to the request as a whole
fn is_candidate_failure(error: &DocsError) -> bool {
    matches!(
        error,
        DocsError::Fetch { .. } | DocsError::Parse { .. } | DocsError::UnsupportedContentType { .. }
    )
}
