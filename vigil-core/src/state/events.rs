//! Events that trigger state transitions

use crate::alert::TriggerSource;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Monitor subscribed to the sample stream
    Attach,
    /// Monitor unsubscribed (screen left, stream ended)
    Detach,

    // Dispatch events
    /// A trigger was handed to the dispatch task
    AlertQueued(TriggerSource),
    /// Backend accepted an alert
    AlertDelivered,
    /// An alert could not be built or delivered
    AlertFailed,
}
