//! Config loading, validation, and path resolution.

use super::model::ExecutorConfig;
use crate::error::{ExecError, Result};
use crate::process::program_path;
use std::path::{Path, PathBuf};
use std::time::Duration;

impl ExecutorConfig {
    /// Use `dir` as the installation directory instead of the executable's.
    pub fn with_program_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.program_dir = Some(dir.into());
        self
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(ExecutorConfig)` - Successfully loaded and validated config
    /// * `Err(ExecError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExecError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ExecutorConfig = serde_yaml::from_str(yaml)
            .map_err(|e| ExecError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ExecError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `bin_dir` must be non-empty
    /// - `binary_name` must be non-empty and a bare file name
    /// - `poll_interval_ms` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.bin_dir.is_empty() {
            return Err(ExecError::Config(
                "config validation failed: bin_dir must be non-empty".to_string(),
            ));
        }

        if self.binary_name.is_empty() {
            return Err(ExecError::Config(
                "config validation failed: binary_name must be non-empty".to_string(),
            ));
        }
        if self.binary_name.contains(['/', '\\']) {
            return Err(ExecError::Config(format!(
                "config validation failed: binary_name must be a file name, not a path \
                 (found '{}')",
                self.binary_name
            )));
        }

        if self.poll_interval_ms == 0 {
            return Err(ExecError::Config(
                "config validation failed: poll_interval_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Full path of the fault-injection binary.
    pub fn binary_path(&self) -> Result<PathBuf> {
        let program_dir = match &self.program_dir {
            Some(dir) => dir.clone(),
            None => program_path()?,
        };
        Ok(program_dir.join(&self.bin_dir).join(&self.binary_name))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
