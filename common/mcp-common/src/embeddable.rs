//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without
//! spawning the server as a child process and speaking JSON-RPC to it.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let tools = server.list_tools();
//! let result = server.call_tool("get-devices", serde_json::json!({})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for in-process tool calls
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with that name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters did not match the tool's schema
    #[error("invalid parameters: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// The handler returned a protocol-level error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for in-process tool calls
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be invoked in-process
///
/// Servers built with `#[tool_router]` implement `list_tools` by delegating
/// to `ToolRouter::list_all` and `call_tool` by matching on the tool name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, as reported during the MCP handshake
    fn server_name(&self) -> &str;

    /// All registered tools with their input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with a JSON object of parameters
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
