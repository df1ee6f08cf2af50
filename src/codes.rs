//! Response code constants for the OS executor.
//!
//! These codes are shared with the fault-injection binary's own JSON output:
//! - 200: Success
//! - 46000: A flag value failed validation
//! - 47000: Executor configuration is invalid
//! - 56000: The child process could not be started
//! - 56010: The child process failed or exited non-zero
//! - 60008: The child process output could not be decoded
//! - 63010: A remote channel was requested but no delegate is configured

/// Successful execution.
pub const OK: i32 = 200;

/// Illegal parameter value supplied in the action flags.
pub const PARAMETER_ILLEGAL: i32 = 46000;

/// Executor configuration could not be loaded or is invalid.
pub const CONFIG_INVALID: i32 = 47000;

/// The OS refused to launch the fault-injection binary.
pub const COMMAND_START_FAILED: i32 = 56000;

/// The fault-injection binary ran but failed.
pub const COMMAND_EXEC_FAILED: i32 = 56010;

/// The fault-injection binary exited cleanly but printed an undecodable result.
pub const RESULT_DECODE_FAILED: i32 = 60008;

/// Remote dispatch was requested without a remote executor.
pub const REMOTE_UNAVAILABLE: i32 = 63010;
