//! Position provider trait

use core::fmt;
use core::future::Future;

use crate::location::{LastKnownLocation, LocationError};

/// Errors obtaining a position fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FixError {
    /// The user did not grant location access
    PermissionDenied,
    /// No fix could be obtained
    Unavailable,
    /// Provider returned coordinates outside valid ranges
    Invalid(LocationError),
}

impl fmt::Display for FixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixError::PermissionDenied => f.write_str("location permission denied"),
            FixError::Unavailable => f.write_str("no position fix available"),
            FixError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl From<LocationError> for FixError {
    fn from(e: LocationError) -> Self {
        FixError::Invalid(e)
    }
}

/// Supplier of position fixes
pub trait LocationProvider {
    /// Obtain the current position
    fn current_fix(&mut self) -> impl Future<Output = Result<LastKnownLocation, FixError>>;
}
