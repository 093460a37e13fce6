//! Fixed-position location provider

use vigil_core::location::LastKnownLocation;
use vigil_core::traits::{FixError, LocationProvider};

/// Provider that always reports the same fix, or no fix at all
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    fix: Result<LastKnownLocation, FixError>,
}

impl FixedLocation {
    /// Provider reporting a validated fix
    pub fn new(latitude: f64, longitude: f64, accuracy: f32) -> Result<Self, FixError> {
        Ok(Self {
            fix: Ok(LastKnownLocation::new(latitude, longitude, accuracy)?),
        })
    }

    /// Provider that behaves as if location access was refused
    pub fn denied() -> Self {
        Self {
            fix: Err(FixError::PermissionDenied),
        }
    }
}

impl LocationProvider for FixedLocation {
    async fn current_fix(&mut self) -> Result<LastKnownLocation, FixError> {
        self.fix
    }
}
