//! Error types for adb command execution

use thiserror::Error;

/// Marker every execution-layer error message starts with
pub const ERROR_MARKER: &str = "ADB Command Error";

/// Errors that can occur when running an adb command
#[derive(Error, Debug)]
pub enum AdbError {
    /// adb wrote to stderr and nothing to stdout
    ///
    /// Treated as a failure even when the exit status was zero.
    #[error("ADB Command Error: {0}")]
    StderrOnly(String),

    /// The command line exited with a non-zero status (or was killed)
    #[error("ADB Command Error: Command failed: {command}\n{stderr}")]
    CommandFailed {
        /// Full command line handed to the shell
        command: String,
        /// Exit code, `None` when terminated by a signal
        code: Option<i32>,
        /// Standard error output
        stderr: String,
    },

    /// The shell process could not be spawned or awaited
    #[error("ADB Command Error: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Result type alias for adb operations
pub type AdbResult<T> = Result<T, AdbError>;

/// Human-readable message for an error, `Unknown error` if it renders empty
pub fn describe_error(err: &AdbError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_carries_marker() {
        let errors = [
            AdbError::StderrOnly("error: no devices/emulators found\n".into()),
            AdbError::CommandFailed {
                command: "\"adb\" help".into(),
                code: Some(1),
                stderr: String::new(),
            },
            AdbError::Spawn(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        ];

        for err in &errors {
            assert!(describe_error(err).starts_with(ERROR_MARKER), "{err}");
        }
    }

    #[test]
    fn test_stderr_only_message() {
        let err = AdbError::StderrOnly("error: device offline".into());
        assert_eq!(
            describe_error(&err),
            "ADB Command Error: error: device offline"
        );
    }

    #[test]
    fn test_command_failed_message() {
        let err = AdbError::CommandFailed {
            command: "\"/opt/adb\" -s abc shell pm list packages".into(),
            code: Some(1),
            stderr: "error: device 'abc' not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "ADB Command Error: Command failed: \"/opt/adb\" -s abc shell pm list packages\n\
             error: device 'abc' not found"
        );
    }
}
