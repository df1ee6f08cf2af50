//! Child process runner for the fault-injection binary.
//!
//! Two ways to run a command:
//! - [`run_captured`] blocks until exit, capturing combined stdout/stderr,
//!   and kills the child when the context is cancelled.
//! - [`spawn_detached`] starts the child in its own process group and
//!   returns its pid immediately. The child is not tied to the context; a
//!   background thread waits on it so it never lingers as a zombie.

use crate::context::ExecContext;
use crate::error::{ExecError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::Duration;

/// Installation directory of the running program (the executable's directory).
pub fn program_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| ExecError::ProgramPath(e.to_string()))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        ExecError::ProgramPath(format!("'{}' has no parent directory", exe.display()))
    })
}

/// Returns true if `path` names an existing directory (symlinks followed).
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Start `command` in the background and return its pid without waiting.
///
/// Stdio is detached and the child gets its own process group, so it keeps
/// running after the caller returns or its context is cancelled. A context
/// that is already done prevents the start.
pub fn spawn_detached(ctx: &ExecContext, mut command: Command) -> Result<u32> {
    if let Some(reason) = ctx.err() {
        return Err(ExecError::CommandStartFailed(reason.to_string()));
    }

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }

    let mut child = command
        .spawn()
        .map_err(|e| ExecError::CommandStartFailed(e.to_string()))?;
    let pid = child.id();

    // Reap the child when it exits; nothing else waits on it.
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(pid)
}

/// Run `command` to completion and return its combined stdout/stderr.
///
/// Both streams go to one anonymous temp file, so the text keeps the order
/// the child wrote it in. Launch failures, non-zero exits and context
/// cancellation all surface as [`ExecError::CommandExecFailed`] carrying
/// whatever output was captured.
pub fn run_captured(
    ctx: &ExecContext,
    mut command: Command,
    poll_interval: Duration,
) -> Result<String> {
    if let Some(reason) = ctx.err() {
        return Err(exec_failed(reason, String::new()));
    }

    let mut capture = tempfile::tempfile().map_err(|e| {
        exec_failed(format!("failed to create output capture: {}", e), String::new())
    })?;
    let stdout = clone_capture(&capture)?;
    let stderr = clone_capture(&capture)?;

    command
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout))
        .stderr(Stdio::from(stderr));

    let mut child = command
        .spawn()
        .map_err(|e| exec_failed(e.to_string(), String::new()))?;

    let status = wait_with_context(&mut child, ctx, poll_interval);
    let output = read_capture(&mut capture)?;

    match status {
        Ok(status) if status.success() => Ok(output),
        Ok(status) => Err(exec_failed(status.to_string(), output)),
        Err(reason) => Err(exec_failed(reason, output)),
    }
}

/// Wait for a child process until it exits or the context is done.
///
/// Returns the exit status, or the reason the child was killed.
fn wait_with_context(
    child: &mut Child,
    ctx: &ExecContext,
    poll_interval: Duration,
) -> std::result::Result<ExitStatus, String> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {
                if let Some(reason) = ctx.err() {
                    kill_process(child);
                    return Err(reason.to_string());
                }
                std::thread::sleep(poll_interval);
            }
            Err(e) => {
                kill_process(child);
                return Err(format!("failed to check process status: {}", e));
            }
        }
    }
}

/// Kill a process and reap it.
fn kill_process(child: &mut Child) {
    // On Unix this is SIGKILL; on Windows it is TerminateProcess.
    let _ = child.kill();
    let _ = child.wait();
}

fn clone_capture(capture: &File) -> Result<File> {
    capture
        .try_clone()
        .map_err(|e| exec_failed(format!("failed to share output capture: {}", e), String::new()))
}

fn read_capture(capture: &mut File) -> Result<String> {
    let mut bytes = Vec::new();
    capture
        .seek(SeekFrom::Start(0))
        .and_then(|_| capture.read_to_end(&mut bytes))
        .map_err(|e| exec_failed(format!("failed to read command output: {}", e), String::new()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn exec_failed(reason: impl Into<String>, output: String) -> ExecError {
    ExecError::CommandExecFailed {
        reason: reason.into(),
        output,
    }
}
