//! Motion trigger detection
//!
//! Turns a stream of 3-axis accelerometer samples into "shake" triggers.

pub mod detector;
pub mod sample;

pub use detector::{DetectorPhase, DetectorState, SampleOutcome, ShakeDetector, ShakeTrigger};
pub use sample::{AccelerationSample, GRAVITY_G};
