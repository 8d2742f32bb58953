//! ADB tool handler implementations
//!
//! Each handler builds one adb command, runs it, and maps the outcome into
//! a response envelope. Command failures never escape as protocol errors.

use mcp_common::{text_failure, text_success, CallToolResult, McpResult};
use tracing::warn;

use crate::adb::{self, describe_error, AdbResult, DeviceTarget};
use crate::config::AdbConfig;
use crate::params::*;

pub const TEXT_INPUT_DONE: &str = "Text input completed successfully";
pub const SERVER_KILLED: &str = "ADB server terminated successfully";
pub const SERVER_STARTED: &str = "ADB server has been started successfully";

/// Wrap an adb outcome: success text from `on_success`, or the error
/// message behind `failure_prefix`
fn respond(
    outcome: AdbResult<String>,
    failure_prefix: &str,
    on_success: impl FnOnce(String) -> String,
) -> McpResult<CallToolResult> {
    match outcome {
        Ok(output) => Ok(text_success(on_success(output))),
        Err(e) => {
            let message = format!("{failure_prefix}: {}", describe_error(&e));
            warn!("{}", message);
            Ok(text_failure(message))
        }
    }
}

pub async fn get_devices(
    config: &AdbConfig,
    params: GetDevicesParams,
) -> McpResult<CallToolResult> {
    let command = if params.show_details {
        "devices -l"
    } else {
        "devices"
    };
    let outcome = adb::execute(config, command, &DeviceTarget::Any).await;
    respond(outcome, "Failed to get device list", |output| output)
}

pub async fn list_packages(
    config: &AdbConfig,
    params: ListPackagesParams,
) -> McpResult<CallToolResult> {
    let mut command = String::from("shell pm list packages");
    for flag in params.flags() {
        command.push(' ');
        command.push_str(flag);
    }
    let outcome = adb::execute(config, &command, &params.device.target()).await;
    respond(outcome, "Failed to get package list", |output| output)
}

/// Quote text for `adb shell input text`
///
/// Embedded single quotes are not escaped and will break the command line.
pub fn quote_input_text(text: &str) -> String {
    format!("'{text}'")
}

pub async fn input_text(
    config: &AdbConfig,
    params: InputTextParams,
) -> McpResult<CallToolResult> {
    let command = format!("shell input text {}", quote_input_text(&params.text));
    let outcome = adb::execute(config, &command, &params.device.target()).await;
    respond(outcome, "Failed to input text", |_| TEXT_INPUT_DONE.to_string())
}

pub async fn help(config: &AdbConfig) -> McpResult<CallToolResult> {
    let outcome = adb::execute(config, "help", &DeviceTarget::Any).await;
    respond(outcome, "Failed to get ADB help", |output| output)
}

pub async fn kill_server(config: &AdbConfig) -> McpResult<CallToolResult> {
    let outcome = adb::execute(config, "kill-server", &DeviceTarget::Any).await;
    respond(outcome, "Failed to kill ADB server", |_| SERVER_KILLED.to_string())
}

pub async fn start_server(config: &AdbConfig) -> McpResult<CallToolResult> {
    let outcome = adb::execute(config, "start-server", &DeviceTarget::Any).await;
    respond(outcome, "Failed to start ADB server", |_| {
        SERVER_STARTED.to_string()
    })
}
