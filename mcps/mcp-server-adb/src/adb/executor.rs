//! Async executor for adb command lines
//!
//! Each call composes `"<adb>" [selector] <command>` and runs it through the
//! platform shell, one process per call. No retries, no timeout.

use std::process::{Output, Stdio};

use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::error::{AdbError, AdbResult};
use super::target::DeviceTarget;
use crate::config::AdbConfig;

/// Compose the full shell command line for one adb invocation
pub fn build_command_line(config: &AdbConfig, target: &DeviceTarget, command: &str) -> String {
    let mut parts = vec![config.quoted_path()];
    if let Some(selector) = target.selector() {
        parts.push(selector);
    }
    let command = command.trim();
    if !command.is_empty() {
        parts.push(command.to_string());
    }
    parts.join(" ")
}

/// Captured output of a finished command line
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        }
    }
}

impl CommandOutput {
    /// Reduce the two streams to a single textual result
    ///
    /// A failed exit status is an error. Otherwise stderr with an empty
    /// stdout is an error too, since adb reports most failures that way.
    /// Some adb commands print informational text to stderr, so stdout is
    /// returned when present, else stderr.
    pub fn into_result(self, command_line: &str) -> AdbResult<String> {
        if self.exit_code != Some(0) {
            return Err(AdbError::CommandFailed {
                command: command_line.to_string(),
                code: self.exit_code,
                stderr: self.stderr,
            });
        }

        if self.stdout.is_empty() && !self.stderr.is_empty() {
            return Err(AdbError::StderrOnly(self.stderr));
        }

        if self.stdout.is_empty() {
            Ok(self.stderr)
        } else {
            Ok(self.stdout)
        }
    }
}

/// Run an adb command against the given target
///
/// `command` already contains the subcommand and its arguments, e.g.
/// `shell pm list packages -3`.
#[instrument(skip(config), fields(adb = %config.adb_path.display()))]
pub async fn execute(
    config: &AdbConfig,
    command: &str,
    target: &DeviceTarget,
) -> AdbResult<String> {
    let line = build_command_line(config, target, command);
    debug!("Executing command: {}", line);

    let output = shell(&line)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    let output = CommandOutput::from(output);
    let result = output.into_result(&line);
    if let Err(e) = &result {
        warn!(error = %e, "adb command failed");
    }
    result
}

#[cfg(not(windows))]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("/bin/sh");
    cmd.arg("-c").arg(line);
    cmd
}

// `/s` makes cmd strip only the outer quote pair. The line goes in raw,
// since the default argument escaping would turn its quotes into `\"`.
#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/d", "/s", "/c"]).raw_arg(format!("\"{line}\""));
    cmd
}
