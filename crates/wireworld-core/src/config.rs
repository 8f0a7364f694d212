//! Configuration types for the driver.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV_VAR: &str = "WIREWORLD_CONFIG";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Pause between two printed generations (milliseconds)
    pub step_delay_ms: u64,
    /// Stop a circuit after this many generations even if current remains
    pub max_generations: Option<u64>,
    /// Directory holding gate_*.txt files; bundled circuits when unset
    pub circuits_dir: Option<String>,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 300,
            max_generations: None,
            circuits_dir: None,
            log_filter: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl DriverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by `WIREWORLD_CONFIG`, or fall back to defaults
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                debug!("Loading configuration from {:?}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_delay_ms == 0 {
            return Err(Error::Config("step_delay_ms must be positive".to_string()));
        }
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
