//! Startup configuration
//!
//! The server takes exactly one positional argument, the path to the adb
//! binary. It is captured once and shared with every tool call.

use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};

/// Usage line printed when the adb path is missing
pub const USAGE: &str = "Usage: mcp-server-adb <path for adb>";

#[derive(Debug, Parser)]
#[command(name = "mcp-server-adb")]
#[command(version, about = "MCP server exposing Android Debug Bridge tools over stdio")]
pub struct Cli {
    /// Path to the adb executable
    #[arg(value_name = "ADB_PATH")]
    pub adb_path: PathBuf,
}

impl Cli {
    /// Parse process arguments, exiting with status 1 and the usage line on
    /// a missing or malformed argument
    pub fn parse_or_usage() -> Self {
        Self::try_parse().unwrap_or_else(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprintln!("{USAGE}");
                std::process::exit(1);
            }
        })
    }

    pub fn into_config(self) -> AdbConfig {
        AdbConfig {
            adb_path: self.adb_path,
        }
    }
}

/// Server-wide configuration, immutable after startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbConfig {
    pub adb_path: PathBuf,
}

impl AdbConfig {
    pub fn new(adb_path: impl Into<PathBuf>) -> Self {
        Self {
            adb_path: adb_path.into(),
        }
    }

    /// The adb path wrapped in double quotes for the shell command line
    pub fn quoted_path(&self) -> String {
        format!("\"{}\"", self.adb_path.display())
    }
}
