//! Configuration loader

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};
use vigil_core::config::{AlertConfig, DetectorConfig};

use crate::error::{AppError, Result};

/// Embedded default configuration (compiled into the binary)
/// Edit vigil.toml and rebuild to change the defaults
pub const EMBEDDED_CONFIG: &str = include_str!("../../vigil.toml");

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one file per storage key
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".vigil"),
        }
    }
}

/// Complete host configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub detector: DetectorConfig,
    pub alert: AlertConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or the embedded defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&text)?
            }
            None => {
                debug!("No config file given, using embedded defaults");
                Self::from_toml_str(EMBEDDED_CONFIG)?
            }
        };
        log_config_summary(&config);
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.alert.validate()?;
        Ok(())
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &AppConfig) {
    debug!(
        interval_ms = config.detector.sampling_interval_ms,
        threshold = config.detector.magnitude_threshold,
        trigger_count = config.detector.trigger_count,
        "Detector"
    );
    debug!(username = %config.alert.username, endpoint = %config.alert.endpoint, "Alert");
    debug!(data_dir = %config.storage.data_dir.display(), "Storage");
}
