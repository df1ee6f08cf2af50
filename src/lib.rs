//! chaos-exec-os: local/remote dispatch executor for OS fault-injection experiments.
//!
//! An [`ExpModel`] names a target, an action and its flags. [`OsExecutor`]
//! either forwards the model to a remote [`Executor`] (SSH channel) or runs
//! the local fault-injection binary:
//!
//! ```text
//! <program_dir>/bin/chaos_os <create|destroy> <target> <action> --uid=<id> [--flag=value]...
//! ```
//!
//! Long-running actions are started detached and reported by pid; all other
//! calls block until the binary exits and its JSON output is decoded into a
//! [`Response`].
//!
//! ```no_run
//! use chaos_exec_os::{ExecContext, Executor, ExecutorConfig, ExpModel, OsExecutor};
//!
//! let executor = OsExecutor::new(ExecutorConfig::default());
//! let model = ExpModel::new("disk", "burn", [("path", "/var/lib"), ("read", "true")]);
//! let resp = executor.exec("7c3b5f0e", &ExecContext::new(), &model);
//! println!("{}", resp);
//! ```

pub mod codes;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod model;
pub mod process;
pub mod response;

pub use config::ExecutorConfig;
pub use context::{CancelHandle, ExecContext, Mode};
pub use error::{ExecError, Result};
pub use executor::{Channel, CommandInvocation, Executor, OsExecutor};
pub use model::{ChannelKind, ExpModel};
pub use response::Response;
