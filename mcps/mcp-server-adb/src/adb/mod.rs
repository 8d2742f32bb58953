//! ADB invocation layer
//!
//! Device selection, command-line assembly and subprocess execution for the
//! configured adb binary.

mod error;
mod executor;
mod target;

pub use error::{describe_error, AdbError, AdbResult, ERROR_MARKER};
pub use executor::{build_command_line, execute, CommandOutput};
pub use target::DeviceTarget;
