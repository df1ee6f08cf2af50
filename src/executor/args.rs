//! Command-line construction for the fault-injection binary.
//!
//! The binary is invoked as:
//!
//! ```text
//! <binary> <mode> <target> <action> --uid=<id> [--flag=value]...
//! ```
//!
//! Flags are emitted in key order. Empty values and the timeout flag are
//! skipped; the channel flag never reaches the model's flag map.

use crate::context::Mode;
use crate::error::{ExecError, Result};
use crate::model::{ExpModel, TIMEOUT_FLAG};
use crate::process::is_dir;
use std::path::PathBuf;
use std::process::Command;

const DISK_TARGET: &str = "disk";
const BURN_ACTION: &str = "burn";
const PATH_FLAG: &str = "path";

/// A fully resolved invocation of the fault-injection binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Path of the binary.
    pub program: PathBuf,
    /// Arguments, starting with the mode.
    pub args: Vec<String>,
    pub mode: Mode,
}

impl CommandInvocation {
    /// Serialize `model` into an invocation of `program`.
    ///
    /// Flag values are validated while they are serialized; the first illegal
    /// value aborts the build.
    pub fn build(program: PathBuf, uid: &str, mode: Mode, model: &ExpModel) -> Result<Self> {
        let mut args = vec![
            mode.to_string(),
            model.target().to_string(),
            model.action_name().to_string(),
            format!("--uid={}", uid),
        ];

        for (key, value) in model.action_flags() {
            if value.is_empty() || key == TIMEOUT_FLAG {
                continue;
            }
            if mode == Mode::Create {
                validate_create_flag(model, key, value)?;
            }
            args.push(format!("--{}={}", key, value));
        }

        Ok(Self {
            program,
            args,
            mode,
        })
    }

    /// A `Command` ready to spawn. Stdio is left to the runner.
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }

    /// Shell-quoted command line, for logs.
    pub fn command_line(&self) -> String {
        let program = self.program.to_string_lossy();
        let args = self.args.iter().map(String::as_str);
        shell_words::join(std::iter::once(&*program).chain(args))
    }
}

/// Per-flag checks for create calls.
fn validate_create_flag(model: &ExpModel, key: &str, value: &str) -> Result<()> {
    let disk_burn = model.target() == DISK_TARGET && model.action_name() == BURN_ACTION;
    if disk_burn && key == PATH_FLAG && !is_dir(value) {
        return Err(ExecError::parameter_illegal(key, value, "it must be a directory"));
    }
    Ok(())
}
