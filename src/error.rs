//! Error types for the OS executor.
//!
//! Uses thiserror for derive macros. Every variant maps to a stable response
//! code so that callers never have to inspect raw process exit statuses.

use crate::codes;
use thiserror::Error;

/// Main error type for executor operations.
///
/// Errors never escape [`Executor::exec`](crate::Executor::exec) directly;
/// they are converted into a failure [`Response`](crate::Response).
#[derive(Error, Debug)]
pub enum ExecError {
    /// A flag value failed validation before any command was built.
    #[error("illegal `{flag}` parameter value: `{value}`. {reason}")]
    ParameterIllegal {
        flag: String,
        value: String,
        reason: String,
    },

    /// The fault-injection binary could not be launched.
    #[error("create experiment command start failed, {0}")]
    CommandStartFailed(String),

    /// The fault-injection binary failed to launch or exited with an error.
    ///
    /// `output` holds the combined stdout/stderr captured so far. It is kept
    /// for diagnostics and is not part of the message.
    #[error("command exec failed, {reason}")]
    CommandExecFailed { reason: String, output: String },

    /// The binary exited cleanly but its output is not a valid response.
    #[error("exec result unmarshal failed, {reason}: `{}`", .output.trim())]
    ResultDecodeFailed { reason: String, output: String },

    /// A remote channel was requested but no remote executor is available.
    #[error("remote channel `{0}` is not available for this executor")]
    RemoteUnavailable(String),

    /// The installation directory of the running program could not be resolved.
    #[error("failed to resolve program path: {0}")]
    ProgramPath(String),

    /// Executor configuration is unreadable or invalid.
    #[error("{0}")]
    Config(String),
}

impl ExecError {
    /// Returns the response code for this error.
    pub fn code(&self) -> i32 {
        match self {
            ExecError::ParameterIllegal { .. } => codes::PARAMETER_ILLEGAL,
            ExecError::CommandStartFailed(_) => codes::COMMAND_START_FAILED,
            ExecError::CommandExecFailed { .. } => codes::COMMAND_EXEC_FAILED,
            ExecError::ResultDecodeFailed { .. } => codes::RESULT_DECODE_FAILED,
            ExecError::RemoteUnavailable(_) => codes::REMOTE_UNAVAILABLE,
            ExecError::ProgramPath(_) => codes::COMMAND_START_FAILED,
            ExecError::Config(_) => codes::CONFIG_INVALID,
        }
    }

    /// Shorthand for a [`ExecError::ParameterIllegal`] error.
    pub fn parameter_illegal(
        flag: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ExecError::ParameterIllegal {
            flag: flag.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Captured process output attached to this error, if any.
    pub fn output(&self) -> Option<&str> {
        match self {
            ExecError::CommandExecFailed { output, .. }
            | ExecError::ResultDecodeFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Result type alias for executor operations.
pub type Result<T> = std::result::Result<T, ExecError>;
