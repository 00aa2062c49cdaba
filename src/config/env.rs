//! Loading `DocsConfig` from environment variables

use std::str::FromStr;

use super::builder::DocsConfigBuilder;
use super::types::{ConfigError, DocsConfig};
use crate::utils::{
    ENV_API_KEY, ENV_FALLBACK_TO_NEXT, ENV_FETCH_TIMEOUT_SECS, ENV_LOG_FILE, ENV_MAX_CHARS,
    ENV_MAX_RESULTS, ENV_MAX_RETRIES, ENV_PAGES_PER_QUERY, ENV_SEARCH_ENDPOINT,
    ENV_SEARCH_TIMEOUT_SECS, ENV_STRIP_SELECTORS,
};

impl DocsConfig {
    /// Read configuration from the process environment
    ///
    /// # Errors
    /// Fails when `SERPER_API_KEY` is missing or any value is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    ///
    /// Unset and blank variables fall back to defaults.
    ///
    /// # Errors
    /// Fails when the API key is missing or any value is malformed.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let mut builder = DocsConfig::builder().api_key(api_key);

        if let Some(endpoint) = get(ENV_SEARCH_ENDPOINT) {
            builder = builder.search_endpoint(endpoint.trim());
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            builder = builder.log_file(path.trim());
        }
        if let Some(n) = parse_var(&get, ENV_MAX_RESULTS)? {
            builder = builder.max_results(n);
        }
        if let Some(n) = parse_var(&get, ENV_MAX_CHARS)? {
            builder = builder.max_chars(n);
        }
        if let Some(n) = parse_var(&get, ENV_PAGES_PER_QUERY)? {
            builder = builder.pages_per_query(n);
        }
        if let Some(secs) = parse_var(&get, ENV_SEARCH_TIMEOUT_SECS)? {
            builder = builder.search_timeout_secs(secs);
        }
        if let Some(secs) = parse_var(&get, ENV_FETCH_TIMEOUT_SECS)? {
            builder = builder.fetch_timeout_secs(secs);
        }
        if let Some(n) = parse_var(&get, ENV_MAX_RETRIES)? {
            builder = builder.max_retries(n);
        }
        if let Some(raw) = get(ENV_FALLBACK_TO_NEXT) {
            builder = builder.fallback_to_next(parse_bool(ENV_FALLBACK_TO_NEXT, &raw)?);
        }
        if let Some(raw) = get(ENV_STRIP_SELECTORS) {
            builder = apply_strip_selectors(builder, &raw);
        }

        builder.build()
    }
}

fn parse_var<T, G>(get: &G, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(var)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

// Selector lists are comma separated; a comma inside a selector group is not supported
fn apply_strip_selectors<S>(builder: DocsConfigBuilder<S>, raw: &str) -> DocsConfigBuilder<S> {
    builder.strip_selectors(
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    )
}
