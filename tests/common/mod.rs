//! Test utilities and helper functions for the docs tool test suite

#![allow(dead_code)]

use futures::future::BoxFuture;
use kodegen_tools_docs::{
    DocsConfig, DocsError, FetchedPage, PageFetcher, SearchProvider, SearchQuery, SearchResult,
};
use mockito::{Mock, Server};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Config with a dummy key and defaults for everything else
pub fn test_config() -> DocsConfig {
    DocsConfig::builder()
        .api_key("test-key")
        .build()
        .expect("test config is valid")
}

/// Creates a test HTML document with specified content
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>body {{ font-family: sans-serif; }}</style>
</head>
<body>
    <nav><a href="/">Home</a> <a href="/docs">Docs</a></nav>
    <main>
    {body}
    </main>
    <footer>Copyright 2025</footer>
    <script>window.analytics = true;</script>
</body>
</html>"#
    )
}

pub fn search_result(rank: usize, url: &str) -> SearchResult {
    SearchResult {
        rank,
        title: format!("Result {rank}"),
        url: url.to_string(),
        snippet: Some(format!("Snippet {rank}")),
    }
}

pub fn html_page(url: &str, html: &str) -> FetchedPage {
    FetchedPage {
        url: url.to_string(),
        status: 200,
        content_type: Some("text/html; charset=utf-8".to_string()),
        body: html.as_bytes().to_vec(),
    }
}

/// Search provider that replays canned responses and records every query
pub struct FakeSearchProvider {
    responses: Mutex<VecDeque<Result<Vec<SearchResult>, DocsError>>>,
    fallback: Result<Vec<SearchResult>, DocsError>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeSearchProvider {
    /// Always answer with `results`
    pub fn returning(results: Vec<SearchResult>) -> Self {
        Self::with_responses(Vec::new(), Ok(results))
    }

    /// Always fail with `error`
    pub fn failing(error: DocsError) -> Self {
        Self::with_responses(Vec::new(), Err(error))
    }

    /// Answer with `responses` in order, then with `fallback`
    pub fn with_responses(
        responses: Vec<Result<Vec<SearchResult>, DocsError>>,
        fallback: Result<Vec<SearchResult>, DocsError>,
    ) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            fallback,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Provider-side query strings, e.g. `site:python.langchain.com/docs vector store`
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl SearchProvider for FakeSearchProvider {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<SearchResult>, DocsError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.provider_query());
            let next = self.responses.lock().unwrap().pop_front();
            next.unwrap_or_else(|| self.fallback.clone())
                .map(|mut results| {
                    results.truncate(max_results);
                    results
                })
        })
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// Page fetcher serving pages from a map
///
/// URLs without an entry fail with a non-retryable 404. A URL can be
/// configured to fail transiently a number of times before succeeding.
#[derive(Default)]
pub struct FakePageFetcher {
    pages: HashMap<String, Result<FetchedPage, DocsError>>,
    transient_failures: Mutex<HashMap<String, usize>>,
    calls: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl FakePageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: FetchedPage) -> Self {
        self.pages.insert(page.url.clone(), Ok(page));
        self
    }

    pub fn with_error(mut self, url: &str, error: DocsError) -> Self {
        self.pages.insert(url.to_string(), Err(error));
        self
    }

    pub fn with_transient_failures(self, url: &str, count: usize) -> Self {
        self.transient_failures
            .lock()
            .unwrap()
            .insert(url.to_string(), count);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl PageFetcher for FakePageFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, DocsError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.fetched.lock().unwrap().push(url.to_string());

            if let Some(remaining) = self.transient_failures.lock().unwrap().get_mut(url)
                && *remaining > 0
            {
                *remaining -= 1;
                return Err(DocsError::Fetch {
                    url: url.to_string(),
                    reason: "request timed out".to_string(),
                    retryable: true,
                });
            }

            self.pages.get(url).cloned().unwrap_or_else(|| {
                Err(DocsError::Fetch {
                    url: url.to_string(),
                    reason: "HTTP 404 Not Found".to_string(),
                    retryable: false,
                })
            })
        })
    }
}

/// Creates a mock HTML endpoint
pub async fn create_html_mock(server: &mut Server, path: &str, html: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(html)
        .create_async()
        .await
}

/// Creates a mock endpoint answering with `status` and an empty HTML body
pub async fn create_status_mock(server: &mut Server, path: &str, status: usize) -> Mock {
    server
        .mock("GET", path)
        .with_status(status)
        .with_header("content-type", "text/html")
        .with_body("")
        .create_async()
        .await
}
