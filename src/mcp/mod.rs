//! MCP (Model Context Protocol) surface
//!
//! Exposes exactly one tool, `get_docs(query, library)`, over rmcp. The tool
//! never fails at the protocol level; pipeline errors come back as text.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kodegen_tools_docs::{DocsConfig, DocsPipeline, DocsServer};
//! use rmcp::{ServiceExt, transport::stdio};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DocsConfig::from_env()?;
//! let pipeline = Arc::new(DocsPipeline::from_config(config)?);
//! DocsServer::new(pipeline).serve(stdio()).await?.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod get_docs;

pub use get_docs::{DocsServer, GetDocsArgs};
