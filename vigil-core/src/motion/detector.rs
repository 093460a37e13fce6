//! Shake detector implementation
//!
//! Debounced run-length detector: a trigger fires once `trigger_count`
//! consecutive accepted samples have a magnitude above the threshold.
//!
//! ```text
//!            high                high (n < count)
//!   ┌──────┐ ─────▶ ┌──────────────┐ ◀──┐
//!   │ IDLE │        │ ACCUMULATING │ ───┘
//!   └──────┘ ◀───── └──────────────┘
//!       ▲    low          │ high (n == count) → trigger
//!       └─────────────────┘
//! ```

use crate::config::DetectorConfig;

use super::sample::AccelerationSample;

/// Detector phase derived from the run counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorPhase {
    /// No high-magnitude run in progress
    Idle,
    /// Run in progress with this many high samples
    Accumulating(u8),
}

/// Mutable detector state
///
/// Owned by exactly one [`ShakeDetector`] and only changed by
/// [`ShakeDetector::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetectorState {
    /// Consecutive accepted samples above threshold
    consecutive_high: u8,
    /// Timestamp of the last sample accepted past the debounce window
    last_accepted_ms: Option<u64>,
}

impl DetectorState {
    /// Consecutive accepted samples above threshold
    pub fn consecutive_high(&self) -> u8 {
        self.consecutive_high
    }

    /// Timestamp of the last accepted sample, if any
    pub fn last_accepted_ms(&self) -> Option<u64> {
        self.last_accepted_ms
    }
}

/// A detected shake gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShakeTrigger {
    /// Timestamp of the sample that completed the run
    pub timestamp_ms: u64,
}

/// Result of feeding one sample to the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleOutcome {
    /// Detector is detached; sample ignored
    Detached,
    /// Sample arrived inside the debounce window; ignored
    Debounced,
    /// Accepted sample at or below threshold; run reset
    Reset,
    /// Accepted sample above threshold; run length so far
    Counted(u8),
    /// Run completed; counter is back to zero
    Triggered(ShakeTrigger),
}

impl SampleOutcome {
    /// Check if this outcome fired a trigger
    pub fn is_trigger(&self) -> bool {
        matches!(self, SampleOutcome::Triggered(_))
    }

    /// The trigger, if one fired
    pub fn trigger(self) -> Option<ShakeTrigger> {
        match self {
            SampleOutcome::Triggered(trigger) => Some(trigger),
            _ => None,
        }
    }
}

/// Shake-to-trigger motion detector
///
/// Pure state transition over input samples: it never blocks and never
/// fails. Dispatching an alert on trigger is the caller's job.
#[derive(Debug, Clone)]
pub struct ShakeDetector {
    config: DetectorConfig,
    state: DetectorState,
    attached: bool,
}

impl Default for ShakeDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl ShakeDetector {
    /// Create an attached detector with the given configuration
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            state: DetectorState::default(),
            attached: true,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Current state snapshot
    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Current phase
    pub fn phase(&self) -> DetectorPhase {
        match self.state.consecutive_high {
            0 => DetectorPhase::Idle,
            n => DetectorPhase::Accumulating(n),
        }
    }

    /// Check if the detector is attached to its sample stream
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Re-attach after [`detach`](Self::detach), starting from a clean state
    pub fn attach(&mut self) {
        if !self.attached {
            self.state = DetectorState::default();
            self.attached = true;
        }
    }

    /// Detach from the sample stream
    ///
    /// Idempotent. Clears the run counter and the debounce window; no
    /// sample processed afterwards can trigger until re-attached.
    pub fn detach(&mut self) {
        self.state = DetectorState::default();
        self.attached = false;
    }

    /// Process one sample
    pub fn process(&mut self, sample: &AccelerationSample) -> SampleOutcome {
        if !self.attached {
            return SampleOutcome::Detached;
        }

        if !self.accept(sample.timestamp_ms) {
            return SampleOutcome::Debounced;
        }

        // Malformed samples count as low: they break the run
        let high = sample.is_finite() && sample.magnitude() > self.config.magnitude_threshold;
        if !high {
            self.state.consecutive_high = 0;
            return SampleOutcome::Reset;
        }

        self.state.consecutive_high = self.state.consecutive_high.saturating_add(1);
        if self.state.consecutive_high >= self.config.trigger_count {
            self.state.consecutive_high = 0;
            return SampleOutcome::Triggered(ShakeTrigger {
                timestamp_ms: sample.timestamp_ms,
            });
        }

        SampleOutcome::Counted(self.state.consecutive_high)
    }

    /// Debounce: accept when strictly more than one interval has elapsed
    /// since the last accepted sample. Out-of-order timestamps are dropped.
    fn accept(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.state.last_accepted_ms {
            if now_ms < last || now_ms - last <= u64::from(self.config.sampling_interval_ms) {
                return false;
            }
        }
        self.state.last_accepted_ms = Some(now_ms);
        true
    }
}
