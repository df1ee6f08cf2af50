//! OS executor: routes a model to the remote delegate or runs the local
//! fault-injection binary.

use super::args::CommandInvocation;
use super::{Channel, Executor};
use crate::config::ExecutorConfig;
use crate::context::{ExecContext, Mode};
use crate::error::{ExecError, Result};
use crate::model::{ChannelKind, ExpModel};
use crate::process::{run_captured, spawn_detached};
use crate::response::Response;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executor for the `os` target family.
///
/// Holds only configuration and an optional remote delegate, so one
/// instance can serve concurrent calls.
#[derive(Clone, Default)]
pub struct OsExecutor {
    config: ExecutorConfig,
    remote: Option<Arc<dyn Executor>>,
}

impl std::fmt::Debug for OsExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsExecutor")
            .field("config", &self.config)
            .field("remote", &self.remote.as_ref().map(|r| r.name().to_string()))
            .finish()
    }
}

impl OsExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            config,
            remote: None,
        }
    }

    /// Use `remote` for models whose channel is SSH.
    pub fn with_remote(mut self, remote: Arc<dyn Executor>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Build the invocation for `model` without running it.
    pub fn invocation(
        &self,
        uid: &str,
        ctx: &ExecContext,
        model: &ExpModel,
    ) -> Result<CommandInvocation> {
        let program = self.config.binary_path()?;
        CommandInvocation::build(program, uid, ctx.mode(), model)
    }

    fn exec_local(&self, uid: &str, ctx: &ExecContext, model: &ExpModel) -> Result<Response> {
        let invocation = self.invocation(uid, ctx, model)?;
        debug!(uid, command = %invocation.command_line(), "run command");

        if model.action_process_hang() && invocation.mode == Mode::Create {
            let pid = spawn_detached(ctx, invocation.command())?;
            debug!(uid, pid, "started detached experiment process");
            return Ok(Response::success(pid));
        }

        let output = run_captured(ctx, invocation.command(), self.config.poll_interval())?;
        debug!(uid, output = %output, "command result");
        Response::decode(&output)
    }
}

impl Executor for OsExecutor {
    fn name(&self) -> &str {
        "os"
    }

    fn exec(&self, uid: &str, ctx: &ExecContext, model: &ExpModel) -> Response {
        if model.channel() == ChannelKind::Ssh {
            return match &self.remote {
                Some(remote) => remote.exec(uid, ctx, model),
                None => {
                    let err = ExecError::RemoteUnavailable(model.channel().to_string());
                    warn!(uid, error = %err, "remote dispatch failed");
                    err.into()
                }
            };
        }

        match self.exec_local(uid, ctx, model) {
            Ok(resp) => resp,
            Err(err) => {
                let code = err.code();
                match err.output() {
                    Some(output) => warn!(uid, code, error = %err, output, "experiment failed"),
                    None => warn!(uid, code, error = %err, "experiment failed"),
                }
                err.into()
            }
        }
    }

    fn set_channel(&mut self, _channel: Arc<dyn Channel>) {}
}
