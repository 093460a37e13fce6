//! Host runtime errors

use std::path::PathBuf;

use thiserror::Error;
use vigil_core::config::ConfigError;
use vigil_core::contacts::ContactError;
use vigil_core::location::LocationError;

use crate::storage::RecordError;

/// Errors surfaced by the host runtime
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`AppConfig`](crate::config::AppConfig)
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(ConfigError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("invalid contact: {0}")]
    Contact(ContactError),

    #[error("invalid location: {0}")]
    Location(LocationError),

    /// Motion trace could not be opened
    #[error("cannot open trace {path}: {source}")]
    TraceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::InvalidConfig(e)
    }
}

impl From<ContactError> for AppError {
    fn from(e: ContactError) -> Self {
        AppError::Contact(e)
    }
}

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::Location(e)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
