//! Serper (Google Search API) provider

use futures::future::BoxFuture;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

use super::provider::SearchProvider;
use super::types::{SearchQuery, SearchResult};
use crate::config::DocsConfig;
use crate::errors::DocsError;
use crate::utils::API_USER_AGENT;

#[derive(Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
}

#[derive(Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: Option<String>,
}

/// [`SearchProvider`] backed by `https://google.serper.dev/search`
#[derive(Clone)]
pub struct SerperProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for SerperProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerperProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl SerperProvider {
    /// # Errors
    /// Returns [`DocsError::Initialization`] if the HTTP client cannot be built.
    pub fn new(config: &DocsConfig) -> Result<Self, DocsError> {
        Self::with_endpoint(
            config.search_endpoint(),
            config.api_key(),
            config.search_timeout(),
        )
    }

    /// # Errors
    /// Returns [`DocsError::Initialization`] if the HTTP client cannot be built.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DocsError> {
        let client = reqwest::Client::builder()
            .user_agent(API_USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| DocsError::Initialization(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    async fn query(
        &self,
        query: &SearchQuery,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, DocsError> {
        let q = query.provider_query();
        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&SerperRequest {
                q: &q,
                num: max_results,
            })
            .send()
            .await
            .map_err(|e| DocsError::from_provider(&e))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DocsError::Authentication {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            warn!(provider = "serper", status = status.as_u16(), "Search provider returned error status");
            return Err(DocsError::ProviderUnavailable(format!("HTTP {status}")));
        }

        let body: SerperResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                DocsError::from_provider(&e)
            } else {
                DocsError::ProviderUnavailable(format!("malformed response body: {e}"))
            }
        })?;

        debug!(
            provider = "serper",
            organic = body.organic.len(),
            "Search provider responded"
        );

        Ok(body
            .organic
            .into_iter()
            .enumerate()
            .map(|(i, item)| SearchResult {
                rank: i + 1,
                title: item.title,
                url: item.link,
                snippet: item.snippet.filter(|s| !s.trim().is_empty()),
            })
            .collect())
    }
}

impl SearchProvider for SerperProvider {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
        max_results: usize,
    ) -> BoxFuture<'a, Result<Vec<SearchResult>, DocsError>> {
        Box::pin(self.query(query, max_results))
    }

    fn name(&self) -> &'static str {
        "serper"
    }
}
