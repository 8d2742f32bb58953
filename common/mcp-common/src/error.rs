//! Protocol-level errors
//!
//! A JSON-RPC error means the call itself was malformed. Failures of the work
//! a tool performs belong inside the response envelope, see
//! [`crate::text_failure`].

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;
