//! Inter-task communication channels
//!
//! Bounded embassy-sync channels connecting the monitor, dispatch and
//! command paths. A session owns one [`Channels`]; tasks borrow it.
//! Every task of a session runs on one executor thread, so the channels
//! use [`NoopRawMutex`].

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;
use vigil_core::alert::{AlertOutcome, TriggerSource};

/// Channel capacity for dispatch requests
pub const DISPATCH_CHANNEL_SIZE: usize = 4;

/// Channel capacity for dispatch outcomes
pub const OUTCOME_CHANNEL_SIZE: usize = 4;

/// Work for the dispatch task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchRequest {
    /// Compose and send an alert
    Trigger(TriggerSource),
    /// No more requests will follow
    Shutdown,
}

pub type DispatchChannel = Channel<NoopRawMutex, DispatchRequest, DISPATCH_CHANNEL_SIZE>;

pub type OutcomeChannel = Channel<NoopRawMutex, AlertOutcome, OUTCOME_CHANNEL_SIZE>;

/// Channels for one monitoring session
pub struct Channels {
    /// Triggers from the monitor (and manual alerts) to dispatch
    pub dispatch: DispatchChannel,
    /// Dispatch results back to the monitor's state machine
    pub outcomes: OutcomeChannel,
}

impl Channels {
    pub const fn new() -> Self {
        Self {
            dispatch: Channel::new(),
            outcomes: Channel::new(),
        }
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn test_channels_are_bounded_and_ordered() {
        let channels = Channels::new();
        for _ in 0..DISPATCH_CHANNEL_SIZE {
            channels
                .dispatch
                .try_send(DispatchRequest::Trigger(TriggerSource::Manual))
                .unwrap();
        }
        assert!(channels.dispatch.try_send(DispatchRequest::Shutdown).is_err());

        block_on(async {
            assert_eq!(
                channels.dispatch.receive().await,
                DispatchRequest::Trigger(TriggerSource::Manual)
            );
            channels.outcomes.send(AlertOutcome::Delivered).await;
            assert_eq!(channels.outcomes.receive().await, AlertOutcome::Delivered);
        });
    }
}
