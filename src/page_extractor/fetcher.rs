//! HTTP fetching of documentation pages
//!
//! [`PageFetcher`] is the seam between the extractor and the network.
//! [`HttpPageFetcher`] is the production implementation: bounded timeout,
//! bounded redirects, a browser user agent, a response size ceiling and no
//! cookie store, so nothing from one request is visible to the next.

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::debug;

use super::content_type::is_supported_content_type;
use super::types::FetchedPage;
use crate::config::DocsConfig;
use crate::errors::DocsError;
use crate::utils::{CHROME_USER_AGENT, parse_http_url};

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml;q=0.9,text/plain;q=0.8,*/*;q=0.5";

/// Retrieves raw documentation pages
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, returning the body of a 2xx response
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, DocsError>>;
}

/// reqwest-backed [`PageFetcher`]
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_page_bytes: usize,
}

impl HttpPageFetcher {
    /// Build a fetcher from the process configuration
    ///
    /// # Errors
    /// Returns [`DocsError::Initialization`] if the HTTP client cannot be built.
    pub fn new(config: &DocsConfig) -> Result<Self, DocsError> {
        Self::with_limits(
            config.fetch_timeout(),
            config.max_redirects(),
            config.max_page_bytes(),
        )
    }

    /// Build a fetcher with explicit limits
    ///
    /// # Errors
    /// Returns [`DocsError::Initialization`] if the HTTP client cannot be built.
    pub fn with_limits(
        timeout: Duration,
        max_redirects: usize,
        max_page_bytes: usize,
    ) -> Result<Self, DocsError> {
        let client = reqwest::Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(Policy::limited(max_redirects))
            .build()
            .map_err(|e| DocsError::Initialization(e.to_string()))?;

        Ok(Self {
            client,
            max_page_bytes,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchedPage, DocsError> {
        let parsed = parse_http_url(url).ok_or_else(|| {
            DocsError::InvalidArgument(format!("'{url}' is not an absolute http(s) URL"))
        })?;

        debug!(url = %parsed, "Fetching documentation page");

        let mut response = self
            .client
            .get(parsed)
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(|e| DocsError::from_fetch(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocsError::Fetch {
                url: url.to_string(),
                reason: format!("HTTP {status}"),
                retryable: status.is_server_error()
                    || status == reqwest::StatusCode::TOO_MANY_REQUESTS,
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Reject binary payloads before downloading them
        if !is_supported_content_type(content_type.as_deref()) {
            return Err(DocsError::UnsupportedContentType {
                url: final_url,
                content_type: content_type.unwrap_or_default(),
            });
        }

        if let Some(length) = response.content_length()
            && length > self.max_page_bytes as u64
        {
            return Err(self.too_large(url));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| DocsError::from_fetch(url, &e))?
        {
            if body.len() + chunk.len() > self.max_page_bytes {
                return Err(self.too_large(url));
            }
            body.extend_from_slice(&chunk);
        }

        debug!(
            url = %final_url,
            status = status.as_u16(),
            bytes = body.len(),
            "Fetched documentation page"
        );

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn too_large(&self, url: &str) -> DocsError {
        DocsError::Fetch {
            url: url.to_string(),
            reason: format!("response exceeds {} bytes", self.max_page_bytes),
            retryable: false,
        }
    }
}

impl PageFetcher for HttpPageFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<FetchedPage, DocsError>> {
        Box::pin(self.fetch_page(url))
    }
}
