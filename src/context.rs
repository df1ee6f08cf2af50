//! Invocation context threaded through every executor call.
//!
//! An [`ExecContext`] carries three things:
//! - a cancellation flag shared by all clones and [`CancelHandle`]s
//! - an optional deadline
//! - an optional destroy marker holding the uid of the experiment being reverted
//!
//! Synchronous command runs poll the context and kill the child once it is
//! done. Detached runs only check it before starting.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Error text reported when the context was cancelled explicitly.
pub const CANCELED: &str = "context canceled";

/// Error text reported when the context deadline passed.
pub const DEADLINE_EXCEEDED: &str = "context deadline exceeded";

/// Whether a call injects a fault or reverts one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Destroy,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Destroy => "destroy",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cancellation and lifecycle handle for one executor call.
#[derive(Debug, Clone, Default)]
pub struct ExecContext {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
    destroy_uid: Option<String>,
}

/// Cancels the context it was taken from, from any thread.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

impl ExecContext {
    /// A context that never expires on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire the context `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Mark the context as reverting the experiment identified by `uid`.
    pub fn destroying(mut self, uid: impl Into<String>) -> Self {
        self.destroy_uid = Some(uid.into());
        self
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Returns true once the context was cancelled or its deadline passed.
    pub fn is_cancelled(&self) -> bool {
        self.err().is_some()
    }

    /// Why the context is done, or `None` while it is still live.
    pub fn err(&self) -> Option<&'static str> {
        if self.cancelled.load(Ordering::SeqCst) {
            return Some(CANCELED);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(DEADLINE_EXCEEDED),
            _ => None,
        }
    }

    /// The uid being destroyed, if this is a destroy call.
    pub fn is_destroy(&self) -> Option<&str> {
        self.destroy_uid.as_deref()
    }

    /// Mode for this call, derived from the destroy marker.
    pub fn mode(&self) -> Mode {
        if self.destroy_uid.is_some() {
            Mode::Destroy
        } else {
            Mode::Create
        }
    }
}
