//! ADB MCP Server
//!
//! Serves the ADB tools over stdio. Takes the path to the adb binary as its
//! only argument.

use mcp_server_adb::{AdbToolsServer, Cli};

#[tokio::main]
async fn main() {
    let config = Cli::parse_or_usage().into_config();

    if let Err(e) = mcp_common::init_tracing("mcp_server_adb") {
        eprintln!("Failed to initialize logging: {e}");
    }

    tracing::info!(adb = %config.adb_path.display(), "Starting ADB MCP Server");

    let server = AdbToolsServer::new(config);

    if let Err(e) = mcp_common::serve_stdio(server).await {
        tracing::error!("Fatal error in main(): {e:#}");
        std::process::exit(1);
    }
}
