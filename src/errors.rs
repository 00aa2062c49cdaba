//! Error types for the documentation lookup pipeline
//!
//! Every component returns [`DocsError`]. The orchestration layer converts
//! each variant into a single user-facing sentence via
//! [`DocsError::user_message`], so nothing ever escapes the tool boundary
//! as a fault.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type DocsResult<T> = Result<T, DocsError>;

/// Error types for registry, search, fetch and extraction
#[derive(Debug, Clone, Error)]
pub enum DocsError {
    /// Library identifier is not in the registry
    #[error("Unsupported library '{requested}' (supported: {})", .supported.join(", "))]
    UnknownLibrary {
        requested: String,
        supported: Vec<&'static str>,
    },

    /// Caller-supplied argument failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Search provider rejected the API key
    #[error("Search provider rejected the credential (HTTP {status})")]
    Authentication { status: u16 },

    /// Network failure, timeout or non-success status from the search provider
    #[error("Search provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Network failure, timeout or non-2xx status from a documentation site
    #[error("Failed to fetch {url}: {reason}")]
    Fetch {
        url: String,
        reason: String,
        retryable: bool,
    },

    /// Payload could not be decoded or yielded no readable text
    #[error("Failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Content type is not HTML-compatible
    #[error("Unsupported content type '{content_type}' at {url}")]
    UnsupportedContentType { url: String, content_type: String },

    /// HTTP client could not be constructed
    #[error("Failed to initialize HTTP client: {0}")]
    Initialization(String),
}

/// Coarse error classification used for logging and message selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownLibrary,
    InvalidArgument,
    Authentication,
    ProviderUnavailable,
    Fetch,
    Parse,
    UnsupportedContentType,
    Initialization,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnknownLibrary => "unknown_library",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Authentication => "authentication",
            ErrorKind::ProviderUnavailable => "provider_unavailable",
            ErrorKind::Fetch => "fetch",
            ErrorKind::Parse => "parse",
            ErrorKind::UnsupportedContentType => "unsupported_content_type",
            ErrorKind::Initialization => "initialization",
        }
    }
}

impl DocsError {
    /// Build a fetch error from a reqwest failure
    ///
    /// Timeouts and connection failures are retryable; redirect loops,
    /// body decoding failures and builder errors are not.
    #[must_use]
    pub fn from_fetch(url: &str, error: &reqwest::Error) -> Self {
        let retryable = error.is_timeout() || error.is_connect() || error.is_request();
        let reason = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_redirect() {
            "too many redirects".to_string()
        } else {
            error.to_string()
        };
        DocsError::Fetch {
            url: url.to_string(),
            reason,
            retryable: retryable && !error.is_redirect(),
        }
    }

    /// Build a provider error from a reqwest failure
    #[must_use]
    pub fn from_provider(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            DocsError::ProviderUnavailable("request timed out".to_string())
        } else {
            DocsError::ProviderUnavailable(error.to_string())
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            DocsError::UnknownLibrary { .. } => ErrorKind::UnknownLibrary,
            DocsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            DocsError::Authentication { .. } => ErrorKind::Authentication,
            DocsError::ProviderUnavailable(_) => ErrorKind::ProviderUnavailable,
            DocsError::Fetch { .. } => ErrorKind::Fetch,
            DocsError::Parse { .. } => ErrorKind::Parse,
            DocsError::UnsupportedContentType { .. } => ErrorKind::UnsupportedContentType,
            DocsError::Initialization(_) => ErrorKind::Initialization,
        }
    }

    /// Check if error is transient and the operation may be retried
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            DocsError::ProviderUnavailable(_) => true,
            DocsError::Fetch { retryable, .. } => *retryable,
            _ => false,
        }
    }

    /// Short, actionable sentence returned to the tool caller
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DocsError::UnknownLibrary {
                requested,
                supported,
            } => format!(
                "Unsupported library '{requested}'. Supported libraries: {}.",
                supported.join(", ")
            ),
            DocsError::InvalidArgument(reason) => format!("Invalid request: {reason}."),
            DocsError::Authentication { .. } => {
                "The search provider rejected the API key. Check SERPER_API_KEY and restart the server."
                    .to_string()
            }
            DocsError::ProviderUnavailable(_) => {
                "Could not reach the search provider. Please try again shortly.".to_string()
            }
            DocsError::Fetch { url, .. } => {
                format!("Could not reach documentation source {url}. Please try again shortly.")
            }
            DocsError::Parse { url, .. } => {
                format!("Could not read documentation page {url}: the page has no readable text.")
            }
            DocsError::UnsupportedContentType { url, content_type } => format!(
                "Unsupported content type '{content_type}' at {url}; only HTML documentation pages can be read."
            ),
            DocsError::Initialization(_) => {
                "The documentation tool is misconfigured. Check the server logs.".to_string()
            }
        }
    }
}
