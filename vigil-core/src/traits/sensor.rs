//! Accelerometer trait

use core::future::Future;

use crate::motion::AccelerationSample;

/// Errors that can occur reading the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Reading could not be parsed or decoded
    Malformed,
    /// Underlying device or source failed
    Io,
}

/// Source of acceleration samples
///
/// Implementations deliver samples in arrival order. The detector is
/// invoked once per sample by the caller.
pub trait MotionSensor {
    /// Wait for the next sample
    ///
    /// Returns `Ok(None)` when the stream has ended. A read error does
    /// not end the stream; the caller may keep reading.
    fn next_sample(
        &mut self,
    ) -> impl Future<Output = Result<Option<AccelerationSample>, SensorError>>;
}
