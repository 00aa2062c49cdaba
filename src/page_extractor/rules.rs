//! Selector rules that decide which parts of a page count as content.
//!
//! Rules are plain data so documentation-site chrome can be excluded
//! through configuration. Every selector is parsed once when the rules are
//! built; invalid selectors are reported then, never during extraction.

use scraper::Selector;
use std::sync::LazyLock;
use thiserror::Error;

/// Elements removed before text collection
pub const DEFAULT_STRIP_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "template",
    "svg",
    "canvas",
    "iframe",
    "form",
    "button",
    "nav",
    "body > header",
    "header.navbar",
    "[role='banner']",
    "[role='navigation']",
    "footer",
    "aside",
    ".sidebar",
    "#sidebar",
    ".navigation",
    ".navbar",
    ".menu",
    ".breadcrumbs",
    ".pagination-nav",
    ".table-of-contents",
    ".toc",
    ".ads",
    ".advertisement",
    ".social-share",
    ".comments",
    "#comments",
    ".related-posts",
    ".cookie-notice",
    ".popup",
    ".modal",
    ".skip-link",
];

/// Main-content containers, in priority order
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    "[role='main']",
    "#main-content",
    ".main-content",
    "#content",
    ".content",
    ".post-content",
    ".entry-content",
    "[itemprop='articleBody']",
    ".article-body",
    ".story-body",
];

static DEFAULT_RULES: LazyLock<ExtractionRules> = LazyLock::new(|| {
    ExtractionRules::new(DEFAULT_STRIP_SELECTORS, DEFAULT_CONTENT_SELECTORS)
        .expect("BUG: hardcoded extraction selectors are invalid")
});

/// A CSS selector that failed to parse
#[derive(Debug, Clone, Error)]
#[error("Invalid CSS selector '{selector}': {reason}")]
pub struct InvalidSelector {
    pub selector: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
struct Rule {
    source: String,
    selector: Selector,
}

impl Rule {
    fn parse(source: &str) -> Result<Self, InvalidSelector> {
        let source = source.trim();
        let selector = Selector::parse(source).map_err(|e| InvalidSelector {
            selector: source.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }
}

/// Strip and content selectors applied by [`extract_text`](super::extract_text)
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    strip: Vec<Rule>,
    content: Vec<Rule>,
}

impl Default for ExtractionRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl ExtractionRules {
    /// Build rules from selector strings
    ///
    /// # Errors
    /// Returns the first selector that fails to parse.
    pub fn new<S: AsRef<str>>(strip: &[S], content: &[S]) -> Result<Self, InvalidSelector> {
        Ok(Self {
            strip: strip
                .iter()
                .map(|s| Rule::parse(s.as_ref()))
                .collect::<Result<_, _>>()?,
            content: content
                .iter()
                .map(|s| Rule::parse(s.as_ref()))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Append site-specific strip selectors to the current set
    ///
    /// Blank entries are ignored so comma-separated environment values
    /// with trailing commas work.
    ///
    /// # Errors
    /// Returns the first selector that fails to parse.
    pub fn with_extra_strip_selectors<I, S>(mut self, extra: I) -> Result<Self, InvalidSelector>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for source in extra {
            let source = source.as_ref().trim();
            if source.is_empty() || self.strip.iter().any(|r| r.source == source) {
                continue;
            }
            self.strip.push(Rule::parse(source)?);
        }
        Ok(self)
    }

    pub fn strip_selectors(&self) -> impl Iterator<Item = &str> {
        self.strip.iter().map(|r| r.source.as_str())
    }

    pub fn content_selectors(&self) -> impl Iterator<Item = &str> {
        self.content.iter().map(|r| r.source.as_str())
    }

    pub(super) fn strip(&self) -> impl Iterator<Item = &Selector> {
        self.strip.iter().map(|r| &r.selector)
    }

    pub(super) fn content(&self) -> impl Iterator<Item = &Selector> {
        self.content.iter().map(|r| &r.selector)
    }
}
