//! Configuration module for the docs tool
//!
//! This module provides the `DocsConfig` struct, its type-safe builder and
//! the environment loader used by the server binary.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{DocsConfigBuilder, WithApiKey};
pub use types::{ConfigError, DocsConfig};
