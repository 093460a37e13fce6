//! Location task
//!
//! Obtains a fix and persists it as the last known location. Without a
//! fix the stored snapshot is left alone.

use tracing::{info, warn};
use vigil_core::location::LastKnownLocation;
use vigil_core::traits::{FixError, LocationProvider};
use vigil_hal::KeyValueStorage;

use crate::storage::save_location;

/// Take one fix and store it
///
/// Returns the fix, or `None` when no fix could be obtained. A fix that
/// could not be saved is still returned.
pub async fn location_task<L, S>(provider: &mut L, storage: &mut S) -> Option<LastKnownLocation>
where
    L: LocationProvider,
    S: KeyValueStorage,
{
    let fix = match provider.current_fix().await {
        Ok(fix) => fix,
        Err(FixError::PermissionDenied) => {
            warn!("Location permission denied");
            return None;
        }
        Err(e) => {
            warn!(error = ?e, "No location fix");
            return None;
        }
    };

    info!(
        latitude = fix.latitude,
        longitude = fix.longitude,
        accuracy = fix.accuracy,
        "Location fix"
    );

    if let Err(e) = save_location(storage, &fix).await {
        warn!(error = %e, "Could not persist location");
    }
    Some(fix)
}
