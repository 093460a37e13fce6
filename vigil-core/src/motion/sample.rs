//! Accelerometer samples

/// Magnitude of the gravity vector at rest, in g
pub const GRAVITY_G: f32 = 1.0;

/// One 3-axis accelerometer reading
///
/// Axes are in units of g (gravity ≈ 1.0 at rest). The timestamp is in
/// milliseconds on whatever monotonic clock the sensor uses; only
/// differences between timestamps are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub timestamp_ms: u64,
}

impl AccelerationSample {
    /// Create a new sample
    pub const fn new(x: f32, y: f32, z: f32, timestamp_ms: u64) -> Self {
        Self { x, y, z, timestamp_ms }
    }

    /// Euclidean norm of the acceleration vector
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Check that every axis holds a finite value
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
