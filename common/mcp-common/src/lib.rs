//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and [`serve_stdio`] for server startup
//! - **Results**: [`text_success`] / [`text_failure`] response envelopes
//! - **Errors**: the [`McpResult`] alias for protocol-level results
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process tool calls
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, text_failure, text_success};
//!
//! // Tool handlers report command failures inside the envelope
//! match run().await {
//!     Ok(out) => text_success(out),
//!     Err(e) => text_failure(format!("Failed to run: {e}")),
//! }
//!
//! // main.rs
//! serve_stdio(MyServer::new(config)).await?;
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::McpResult;
pub use init::{init_tracing, serve_stdio};
pub use result::{text_failure, text_success};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
