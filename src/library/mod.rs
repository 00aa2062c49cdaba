//! Library Registry
//!
//! Maps the public library identifiers accepted by `get_docs` to the
//! documentation domain each search is scoped to. The table is static;
//! resolution is pure and never touches the network.

use std::fmt;
use std::str::FromStr;

use crate::errors::DocsError;

/// A library whose documentation can be searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Library {
    LangChain,
    LlamaIndex,
    OpenAi,
}

/// Registry row: identifier and the domain searches are restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryEntry {
    pub library: Library,
    /// Case-sensitive public identifier, e.g. `llama_index`
    pub identifier: &'static str,
    /// Host plus optional path prefix, e.g. `python.langchain.com/docs`
    pub docs_domain: &'static str,
}

static REGISTRY: [LibraryEntry; 3] = [
    LibraryEntry {
        library: Library::LangChain,
        identifier: "langchain",
        docs_domain: "python.langchain.com/docs",
    },
    LibraryEntry {
        library: Library::LlamaIndex,
        identifier: "llama_index",
        docs_domain: "docs.llamaindex.ai/en/stable",
    },
    LibraryEntry {
        library: Library::OpenAi,
        identifier: "openai",
        docs_domain: "platform.openai.com/docs",
    },
];

impl Library {
    pub const ALL: [Library; 3] = [Library::LangChain, Library::LlamaIndex, Library::OpenAi];

    #[must_use]
    pub fn entry(self) -> &'static LibraryEntry {
        match self {
            Library::LangChain => &REGISTRY[0],
            Library::LlamaIndex => &REGISTRY[1],
            Library::OpenAi => &REGISTRY[2],
        }
    }

    #[must_use]
    pub fn identifier(self) -> &'static str {
        self.entry().identifier
    }

    #[must_use]
    pub fn docs_domain(self) -> &'static str {
        self.entry().docs_domain
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Library {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).map(|entry| entry.library)
    }
}

/// Look up a library identifier
///
/// Matching is exact: `LangChain` and ` langchain` are both unknown.
///
/// # Errors
/// Returns [`DocsError::UnknownLibrary`] carrying the supported identifiers.
pub fn resolve(identifier: &str) -> Result<&'static LibraryEntry, DocsError> {
    REGISTRY
        .iter()
        .find(|entry| entry.identifier == identifier)
        .ok_or_else(|| DocsError::UnknownLibrary {
            requested: identifier.to_string(),
            supported: supported_identifiers(),
        })
}

/// Identifiers in registry order
#[must_use]
pub fn supported_identifiers() -> Vec<&'static str> {
    REGISTRY.iter().map(|entry| entry.identifier).collect()
}
