//! Executor contract and the OS executor.
//!
//! - **Executor**: `exec(uid, ctx, model) -> Response`, shared by the local
//!   OS executor and any remote delegate
//! - **Args**: command-line construction and flag validation
//! - **Os**: local/remote dispatch and process execution
//! - **Channel**: transport reserved for the `set_channel` hook
//!
//! Executors are stateless between calls and safe to share across threads.

mod args;
mod os;


pub use args::CommandInvocation;
pub use os::OsExecutor;

use crate::context::ExecContext;
use crate::model::ExpModel;
use crate::response::Response;
use std::sync::Arc;

/// Transport an executor may be given through [`Executor::set_channel`].
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;
}

/// Runs one experiment model and reports a uniform [`Response`].
pub trait Executor: Send + Sync {
    /// Stable identifier of this executor kind.
    fn name(&self) -> &str;

    /// Execute `model` for the experiment `uid`.
    ///
    /// Never panics on bad input and never returns raw process status; every
    /// outcome is folded into the response.
    fn exec(&self, uid: &str, ctx: &ExecContext, model: &ExpModel) -> Response;

    /// Reserved hook for injecting a transport. Executors may ignore it.
    fn set_channel(&mut self, channel: Arc<dyn Channel>);
}
