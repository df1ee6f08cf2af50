//! Experiment model: one fault-injection invocation.
//!
//! The routing flag is resolved into a [`ChannelKind`] when the model is
//! built, so the executor never has to look it up in the flag map and the
//! flag can never leak into the command line.
//!
//! # Document Format
//!
//! ```yaml
//! target: disk
//! action: burn
//! process_hang: true
//! flags:
//!   path: /var/lib
//!   read: "true"
//!   channel: ssh
//! ```

use crate::error::{ExecError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Reserved flag selecting the transport. Consumed at construction.
pub const CHANNEL_FLAG: &str = "channel";

/// Reserved flag handled by the caller; never passed to the binary.
pub const TIMEOUT_FLAG: &str = "timeout";

/// Channel flag value that routes the call to the remote executor.
pub const SSH_CHANNEL: &str = "ssh";

/// Transport used to run the fault-injection binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelKind {
    /// Run the binary as a local child process.
    #[default]
    Local,
    /// Hand the call to the remote (SSH) executor.
    Ssh,
}

impl ChannelKind {
    /// Resolve a channel flag value. Only the SSH marker selects remote dispatch.
    pub fn from_flag(value: &str) -> Self {
        if value == SSH_CHANNEL {
            ChannelKind::Ssh
        } else {
            ChannelKind::Local
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ChannelKind::Ssh)
    }
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelKind::Local => write!(f, "local"),
            ChannelKind::Ssh => write!(f, "ssh"),
        }
    }
}

/// Description of one fault-injection operation.
///
/// Owned by the caller; executors only borrow it for the duration of a call.
/// Fields are private so every model goes through [`ExpModel::new`],
/// [`ExpModel::with_flag`] or deserialization, which keep the channel flag
/// out of the flag map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawExpModel")]
pub struct ExpModel {
    target: String,
    action_name: String,
    action_flags: BTreeMap<String, String>,
    action_process_hang: bool,
    channel: ChannelKind,
}

/// Model document as written by users, before channel resolution.
#[derive(Debug, Deserialize)]
struct RawExpModel {
    target: String,
    action: String,
    #[serde(default)]
    flags: BTreeMap<String, String>,
    #[serde(default)]
    process_hang: bool,
}

impl From<RawExpModel> for ExpModel {
    fn from(raw: RawExpModel) -> Self {
        ExpModel::new(raw.target, raw.action, raw.flags).with_process_hang(raw.process_hang)
    }
}

impl ExpModel {
    /// Build a model from a raw flag map, consuming the channel flag.
    pub fn new<K, V>(
        target: impl Into<String>,
        action_name: impl Into<String>,
        flags: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut action_flags: BTreeMap<String, String> = flags
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let channel = action_flags
            .remove(CHANNEL_FLAG)
            .map(|v| ChannelKind::from_flag(&v))
            .unwrap_or_default();

        Self {
            target: target.into(),
            action_name: action_name.into(),
            action_flags,
            action_process_hang: false,
            channel,
        }
    }

    /// Add or replace one flag. The channel flag updates [`ExpModel::channel`].
    pub fn with_flag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == CHANNEL_FLAG {
            self.channel = ChannelKind::from_flag(&value);
        } else {
            self.action_flags.insert(key, value);
        }
        self
    }

    pub fn with_process_hang(mut self, hang: bool) -> Self {
        self.action_process_hang = hang;
        self
    }

    pub fn with_channel(mut self, channel: ChannelKind) -> Self {
        self.channel = channel;
        self
    }

    /// Resource category, e.g. `disk`.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Operation on the target, e.g. `burn`.
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Action flags, ordered by key. Never contains [`CHANNEL_FLAG`].
    pub fn action_flags(&self) -> &BTreeMap<String, String> {
        &self.action_flags
    }

    /// Whether the action keeps running in the background after it starts.
    pub fn action_process_hang(&self) -> bool {
        self.action_process_hang
    }

    /// Transport resolved from the channel flag.
    pub fn channel(&self) -> ChannelKind {
        self.channel
    }

    /// Look up a flag value.
    pub fn flag(&self, key: &str) -> Option<&str> {
        self.action_flags.get(key).map(String::as_str)
    }

    /// Parse a model document from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            ExecError::Config(format!("failed to parse experiment model YAML: {}", e))
        })
    }

    /// Parse a model document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ExecError::Config(format!("failed to parse experiment model JSON: {}", e))
        })
    }
}
