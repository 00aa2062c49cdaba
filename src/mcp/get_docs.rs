//! `get_docs` MCP tool implementation
//!
//! Searches one library's documentation site and returns the main text of
//! the best matching page, annotated with its source URL.

use rmcp::{
    ErrorData as McpError,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::library::supported_identifiers;
use crate::pipeline::DocsPipeline;
use crate::utils::safe_truncate_chars;

/// Arguments accepted by `get_docs`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocsArgs {
    /// What to look up, e.g. "vector store retriever"
    pub query: String,
    /// Library identifier: "langchain", "llama_index" or "openai"
    pub library: String,
}

// =============================================================================
// Server
// =============================================================================

#[derive(Clone)]
pub struct DocsServer {
    pipeline: Arc<DocsPipeline>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DocsServer {
    #[must_use]
    pub fn new(pipeline: Arc<DocsPipeline>) -> Self {
        Self {
            pipeline,
            tool_router: Self::tool_router(),
        }
    }

    /// Errors are reported as text in a successful result so the calling
    /// model can read them.
    #[tool(
        description = "Search the latest documentation for a given query and library. \
                       Supported libraries: langchain, llama_index, openai. \
                       Returns the main text of the best matching documentation page with its source URL.",
        annotations(read_only_hint = true, open_world_hint = true)
    )]
    pub async fn get_docs(
        &self,
        Parameters(args): Parameters<GetDocsArgs>,
    ) -> Result<CallToolResult, McpError> {
        info!(
            library = %safe_truncate_chars(&args.library, 64),
            query = %safe_truncate_chars(&args.query, 200),
            "get_docs called"
        );
        let text = self.pipeline.get_docs(&args.query, &args.library).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for DocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Documentation lookup for AI libraries. Call get_docs with a query and one of: {}.",
                supported_identifiers().join(", ")
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
