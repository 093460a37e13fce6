//! Configuration type definitions

use core::fmt;

use heapless::String;

use vigil_protocol::{DEFAULT_ENDPOINT, MAX_ENDPOINT_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum username length
pub const MAX_USERNAME_LEN: usize = 32;

/// Default debounce window between accepted samples
pub const DEFAULT_SAMPLING_INTERVAL_MS: u32 = 200;

/// Default magnitude threshold, in g
pub const DEFAULT_MAGNITUDE_THRESHOLD: f32 = 1.2;

/// Default number of consecutive high samples that fire a trigger
pub const DEFAULT_TRIGGER_COUNT: u8 = 5;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `trigger_count` is zero
    ZeroTriggerCount,
    /// `magnitude_threshold` is not a positive finite number
    InvalidThreshold,
    /// `sampling_interval_ms` is zero
    ZeroInterval,
    /// Username is empty
    EmptyUsername,
    /// Endpoint is not an http(s) URL
    InvalidEndpoint,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTriggerCount => f.write_str("trigger_count must be at least 1"),
            ConfigError::InvalidThreshold => {
                f.write_str("magnitude_threshold must be a positive number")
            }
            ConfigError::ZeroInterval => f.write_str("sampling_interval_ms must be at least 1"),
            ConfigError::EmptyUsername => f.write_str("username must not be empty"),
            ConfigError::InvalidEndpoint => f.write_str("endpoint must be an http(s) URL"),
        }
    }
}

/// Shake detector tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DetectorConfig {
    /// Minimum spacing between accepted samples (ms, exclusive)
    pub sampling_interval_ms: u32,
    /// Magnitude a sample must exceed to count as high (g)
    pub magnitude_threshold: f32,
    /// Consecutive high samples needed to trigger
    pub trigger_count: u8,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            sampling_interval_ms: DEFAULT_SAMPLING_INTERVAL_MS,
            magnitude_threshold: DEFAULT_MAGNITUDE_THRESHOLD,
            trigger_count: DEFAULT_TRIGGER_COUNT,
        }
    }
}

impl DetectorConfig {
    /// Validate tuning values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_count == 0 {
            return Err(ConfigError::ZeroTriggerCount);
        }
        if !self.magnitude_threshold.is_finite() || self.magnitude_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.sampling_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

/// Alert dispatch settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AlertConfig {
    /// Name sent as `username` in the alert body
    pub username: String<MAX_USERNAME_LEN>,
    /// Backend URL the alert is posted to
    pub endpoint: String<MAX_ENDPOINT_LEN>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        let mut username = String::new();
        let _ = username.push_str("User");
        let mut endpoint = String::new();
        let _ = endpoint.push_str(DEFAULT_ENDPOINT);
        Self { username, endpoint }
    }
}

impl AlertConfig {
    /// Validate dispatch settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        let rest = self
            .endpoint
            .strip_prefix("https://")
            .or_else(|| self.endpoint.strip_prefix("http://"))
            .ok_or(ConfigError::InvalidEndpoint)?;
        if rest.is_empty() || rest.starts_with('/') || rest.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidEndpoint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.sampling_interval_ms, 200);
        assert_eq!(config.magnitude_threshold, 1.2);
        assert_eq!(config.trigger_count, 5);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_detector_rejects_bad_values() {
        let zero_count = DetectorConfig {
            trigger_count: 0,
            ..Default::default()
        };
        assert_eq!(zero_count.validate(), Err(ConfigError::ZeroTriggerCount));

        for threshold in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = DetectorConfig {
                magnitude_threshold: threshold,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidThreshold));
        }

        let zero_interval = DetectorConfig {
            sampling_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero_interval.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_alert_defaults() {
        let config = AlertConfig::default();
        assert_eq!(config.username.as_str(), "User");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_alert_rejects_bad_endpoint() {
        for endpoint in ["", "ftp://host/", "https://", "http:///path", "https://a b/"] {
            let mut config = AlertConfig::default();
            config.endpoint.clear();
            config.endpoint.push_str(endpoint).unwrap();
            assert_eq!(config.validate(), Err(ConfigError::InvalidEndpoint), "{endpoint}");
        }
    }

    #[test]
    fn test_alert_rejects_blank_username() {
        let mut config = AlertConfig::default();
        config.username.clear();
        config.username.push_str("   ").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::EmptyUsername));
    }
}
