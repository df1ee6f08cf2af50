//! Configuration model for the OS executor.
//!
//! This module defines the `ExecutorConfig` struct, usually loaded from an
//! `executor.yaml` next to the host program. It supports forward-compatible
//! YAML parsing (unknown fields are ignored), sensible defaults for every
//! field, and validation of config values.

mod model;
mod operations;


pub use model::ExecutorConfig;
