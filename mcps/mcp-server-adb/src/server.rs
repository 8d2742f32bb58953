//! MCP Server implementation for Android Debug Bridge tools
//!
//! Registers the tools with rmcp's router; each tool delegates to its
//! handler together with the shared [`AdbConfig`].

use std::sync::Arc;

use mcp_common::{
    async_trait, CallToolResult, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError, Tool,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::AdbConfig;
use crate::handlers;
use crate::params::*;

/// Name reported during the MCP handshake
pub const SERVER_NAME: &str = "adb-mcp-tools";

/// The ADB MCP Server
#[derive(Clone)]
pub struct AdbToolsServer {
    config: Arc<AdbConfig>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AdbToolsServer {
    pub fn new(config: AdbConfig) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    pub fn config(&self) -> &AdbConfig {
        &self.config
    }

    #[tool(name = "get-devices", description = "Get a list of connected Android devices")]
    async fn get_devices(
        &self,
        Parameters(params): Parameters<GetDevicesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_devices(&self.config, params).await
    }

    #[tool(name = "list-packages", description = "Get a list of installed applications")]
    async fn list_packages(
        &self,
        Parameters(params): Parameters<ListPackagesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_packages(&self.config, params).await
    }

    #[tool(name = "input-text", description = "Input text to the connected Android device")]
    async fn input_text(
        &self,
        Parameters(params): Parameters<InputTextParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::input_text(&self.config, params).await
    }

    #[tool(name = "help", description = "Show ADB help information")]
    async fn help(&self) -> Result<CallToolResult, McpError> {
        handlers::help(&self.config).await
    }

    #[tool(name = "kill-server", description = "Kill the ADB server process")]
    async fn kill_server(&self) -> Result<CallToolResult, McpError> {
        handlers::kill_server(&self.config).await
    }

    #[tool(name = "start-server", description = "Start the ADB server process")]
    async fn start_server(&self) -> Result<CallToolResult, McpError> {
        handlers::start_server(&self.config).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for AdbToolsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "ADB MCP server for Android devices. \
                 Lists devices and installed packages, types text on a device, \
                 and starts or stops the adb server."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for AdbToolsServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_description(&self) -> Option<&str> {
        Some("Android Debug Bridge tools: devices, packages, text input and server lifecycle")
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get-devices" => {
                let params: GetDevicesParams = serde_json::from_value(params)?;
                self.get_devices(Parameters(params)).await.map_err(Into::into)
            }

            "list-packages" => {
                let params: ListPackagesParams = serde_json::from_value(params)?;
                self.list_packages(Parameters(params)).await.map_err(Into::into)
            }

            "input-text" => {
                let params: InputTextParams = serde_json::from_value(params)?;
                self.input_text(Parameters(params)).await.map_err(Into::into)
            }

            "help" => self.help().await.map_err(Into::into),

            "kill-server" => self.kill_server().await.map_err(Into::into),

            "start-server" => self.start_server().await.map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> AdbToolsServer {
        AdbToolsServer::new(AdbConfig::new("/usr/bin/adb"))
    }

    #[test]
    fn test_registers_all_tools() {
        let tools = server().list_tools();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            vec![
                "get-devices",
                "help",
                "input-text",
                "kill-server",
                "list-packages",
                "start-server"
            ]
        );
    }

    #[test]
    fn test_input_text_schema_requires_text() {
        let tools = server().list_tools();
        let tool = tools.iter().find(|t| t.name == "input-text").unwrap();
        let required = tool.input_schema.get("required").and_then(Value::as_array);
        let required: Vec<&str> = required
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        assert_eq!(required, vec!["text"]);
    }

    #[test]
    fn test_server_info() {
        let server = server();
        let info = rmcp::ServerHandler::get_info(&server);
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
        assert_eq!(server.server_name(), SERVER_NAME);
        assert_eq!(server.config().adb_path, std::path::PathBuf::from("/usr/bin/adb"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = server().call_tool("reboot", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_params() {
        let result = server()
            .call_tool("get-devices", serde_json::json!({ "showDetails": "yes" }))
            .await;
        assert!(matches!(result, Err(EmbeddableError::SerdeError(_))));
    }
}
