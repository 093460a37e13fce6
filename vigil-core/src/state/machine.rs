//! State machine definition

use super::events::Event;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not subscribed to samples; nothing can trigger
    #[default]
    Detached,
    /// Subscribed and idle
    Armed,
    /// Subscribed with this many alerts in flight
    Alerting(u8),
}

impl State {
    /// Check if samples should reach the detector
    ///
    /// Dispatch in progress never blocks detection.
    pub fn accepts_samples(&self) -> bool {
        matches!(self, State::Armed | State::Alerting(_))
    }

    /// Alerts queued but not yet resolved
    pub fn pending_alerts(&self) -> u8 {
        match self {
            State::Alerting(n) => *n,
            _ => 0,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Detach wins from anywhere
            (_, Detach) => Detached,

            (Detached, Attach) => Armed,

            (Armed, AlertQueued(_)) => Alerting(1),
            (Alerting(n), AlertQueued(_)) => Alerting(n.saturating_add(1)),

            (Alerting(n), AlertDelivered | AlertFailed) if n > 1 => Alerting(n - 1),
            (Alerting(_), AlertDelivered | AlertFailed) => Armed,

            // Default: stay in current state
            _ => self,
        }
    }
}
