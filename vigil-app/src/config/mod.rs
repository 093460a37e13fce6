//! Configuration loading
//!
//! Loads `AppConfig` from a TOML file, or from the defaults compiled into
//! the binary when no file is given.

pub mod loader;

pub use loader::{AppConfig, StorageConfig, EMBEDDED_CONFIG};
