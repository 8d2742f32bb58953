//! ADB MCP Library
//!
//! MCP tools proxying to an Android Debug Bridge binary: device listing,
//! package listing, text input, help output and adb server start/stop.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use mcp_server_adb::{AdbConfig, AdbToolsServer};
//!
//! let server = AdbToolsServer::new(AdbConfig::new("/opt/android-sdk/platform-tools/adb"));
//! // Serve via stdio, or call tools in-process through EmbeddableMcp
//! ```

pub mod adb;
pub mod config;
pub mod handlers;
pub mod params;
pub mod server;

pub use config::{AdbConfig, Cli};
pub use server::AdbToolsServer;

pub use params::*;
