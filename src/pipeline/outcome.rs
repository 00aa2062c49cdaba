//! Typed pipeline outcome and its rendering into the tool response

use crate::errors::DocsError;
use crate::library::Library;
use crate::page_extractor::ExtractedDocument;

const SECTION_SEPARATOR: &str = "\n\n---\n\n";

/// Terminal state of one `get_docs` request
#[derive(Debug, Clone)]
pub enum DocsOutcome {
    /// At least one page was extracted
    Found {
        library: Library,
        documents: Vec<ExtractedDocument>,
    },
    /// The search returned no usable candidates
    NoResults { library: Library, query: String },
    Failed(DocsError),
}

impl DocsOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, DocsOutcome::Found { .. })
    }

    /// Render the string returned to the tool caller
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            DocsOutcome::Found { documents, .. } => documents
                .iter()
                .map(render_document)
                .collect::<Vec<_>>()
                .join(SECTION_SEPARATOR),
            DocsOutcome::NoResults { library, query } => {
                format!("No documentation found for '{query}' in {library} docs.")
            }
            DocsOutcome::Failed(error) => error.user_message(),
        }
    }
}

fn render_document(doc: &ExtractedDocument) -> String {
    let mut out = format!("Source: {}\n", doc.source_url);
    if let Some(title) = &doc.title {
        out.push_str("Title: ");
        out.push_str(title);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&doc.text);
    if doc.truncated {
        out.push_str("\n\n[Content truncated]");
    }
    out
}
