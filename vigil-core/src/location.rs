//! Last known location
//!
//! A snapshot of the most recent position fix. Every fix overwrites the
//! previous one; alerts read whatever snapshot exists at trigger time.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accuracy radius accepted, in metres
pub const MAX_ACCURACY_M: f32 = 1.0e7;

/// Location validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LocationError {
    /// A coordinate or the accuracy is NaN or infinite
    NonFinite,
    /// Latitude outside [-90, 90]
    LatitudeOutOfRange,
    /// Longitude outside [-180, 180]
    LongitudeOutOfRange,
    /// Accuracy negative or above [`MAX_ACCURACY_M`]
    AccuracyOutOfRange,
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::NonFinite => f.write_str("coordinates must be finite"),
            LocationError::LatitudeOutOfRange => f.write_str("latitude must be within [-90, 90]"),
            LocationError::LongitudeOutOfRange => {
                f.write_str("longitude must be within [-180, 180]")
            }
            LocationError::AccuracyOutOfRange => {
                write!(f, "accuracy must be within [0, {MAX_ACCURACY_M}] metres")
            }
        }
    }
}

/// Position fix in degrees, accuracy radius in metres
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LastKnownLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f32,
}

impl LastKnownLocation {
    /// Create a validated location
    pub fn new(latitude: f64, longitude: f64, accuracy: f32) -> Result<Self, LocationError> {
        let location = Self {
            latitude,
            longitude,
            accuracy,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check coordinate ranges
    pub fn validate(&self) -> Result<(), LocationError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() || !self.accuracy.is_finite()
        {
            return Err(LocationError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::LongitudeOutOfRange);
        }
        if !(0.0..=MAX_ACCURACY_M).contains(&self.accuracy) {
            return Err(LocationError::AccuracyOutOfRange);
        }
        Ok(())
    }
}
