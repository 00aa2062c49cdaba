//! Data structures produced by the content extractor

/// Raw response from a documentation site
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,

    /// HTTP status code
    pub status: u16,

    /// Value of the `Content-Type` header, if any
    pub content_type: Option<String>,

    /// Response body, bounded by the fetcher's size ceiling
    pub body: Vec<u8>,
}

/// Cleaned plain text extracted from one documentation page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Page the text came from
    pub source_url: String,

    /// Contents of the page's `<title>`, whitespace-normalized
    pub title: Option<String>,

    /// Whitespace-normalized main content
    pub text: String,

    /// Whether `text` was cut to fit the character budget
    pub truncated: bool,
}
