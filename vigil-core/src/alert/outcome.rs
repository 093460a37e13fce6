//! Dispatch outcome

use crate::traits::TransportError;

use super::request::AlertError;

/// Notification text for a delivered alert
pub const SENT_NOTIFICATION: &str = "Emergency alert sent!";

/// Notification text for a failed alert
pub const FAILED_NOTIFICATION: &str = "Failed to send emergency alert.";

/// Why a dispatch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertFailure {
    /// The request could not be built
    Compose(AlertError),
    /// The backend did not accept it
    Transport(TransportError),
}

impl From<AlertError> for AlertFailure {
    fn from(e: AlertError) -> Self {
        AlertFailure::Compose(e)
    }
}

impl From<TransportError> for AlertFailure {
    fn from(e: TransportError) -> Self {
        AlertFailure::Transport(e)
    }
}

/// How one dispatch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertOutcome {
    Delivered,
    Failed(AlertFailure),
}

impl AlertOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, AlertOutcome::Delivered)
    }

    /// User-visible notification text
    pub fn notification(&self) -> &'static str {
        match self {
            AlertOutcome::Delivered => SENT_NOTIFICATION,
            AlertOutcome::Failed(_) => FAILED_NOTIFICATION,
        }
    }

    /// Short reason for a failure, for the log and the notifier detail line
    pub fn reason(&self) -> Option<&'static str> {
        let AlertOutcome::Failed(failure) = self else {
            return None;
        };
        Some(match failure {
            AlertFailure::Compose(AlertError::NoContacts) => "no emergency contacts",
            AlertFailure::Compose(AlertError::NoLocation) => "location not available",
            AlertFailure::Compose(AlertError::MessageTooLong) => "message too long",
            AlertFailure::Compose(AlertError::UsernameTooLong) => "username too long",
            AlertFailure::Compose(AlertError::Encode(_)) => "request too large",
            AlertFailure::Transport(TransportError::Unreachable) => "backend unreachable",
            AlertFailure::Transport(TransportError::Rejected(_)) => "backend rejected request",
            AlertFailure::Transport(TransportError::Timeout) => "backend timed out",
            AlertFailure::Transport(TransportError::Io) => "i/o error",
        })
    }
}

impl<E: Into<AlertFailure>> From<Result<(), E>> for AlertOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => AlertOutcome::Delivered,
            Err(e) => AlertOutcome::Failed(e.into()),
        }
    }
}
