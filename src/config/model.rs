//! ExecutorConfig struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for locating and running the fault-injection binary.
///
/// The binary lives at `<program_dir>/<bin_dir>/<binary_name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Installation directory of the host program. When unset, the directory
    /// of the running executable is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_dir: Option<PathBuf>,

    /// Directory holding the binary, relative to `program_dir`.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,

    /// File name of the fault-injection binary.
    #[serde(default = "default_binary_name")]
    pub binary_name: String,

    /// How often a running child is checked for exit or cancellation.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            program_dir: None,
            bin_dir: default_bin_dir(),
            binary_name: default_binary_name(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

pub(crate) fn default_bin_dir() -> String {
    "bin".to_string()
}
pub(crate) fn default_binary_name() -> String {
    "chaos_os".to_string()
}
pub(crate) fn default_poll_interval_ms() -> u64 {
    50
}
