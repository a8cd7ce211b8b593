//! Configuration module for the documentation search tools
//!
//! This module provides the `DocsConfig` struct and its builder with
//! validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::DocsConfigBuilder;
pub use types::DocsConfig;
