//! Content Extractor
//!
//! Fetches a documentation page and turns it into a bounded, cleaned plain
//! text block suitable for returning to a language model.

mod content_type;
mod extractor;
mod fetcher;
mod rules;
mod text_extraction;
mod types;
mod whitespace;

pub use content_type::{ContentKind, classify, decode_body, is_supported_content_type, mime_essence};
pub use extractor::{ContentExtractor, process_page};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use rules::{DEFAULT_CONTENT_SELECTORS, DEFAULT_STRIP_SELECTORS, ExtractionRules, InvalidSelector};
pub use text_extraction::{PageText, extract_text};
pub use types::{ExtractedDocument, FetchedPage};
pub use whitespace::normalize_whitespace;
