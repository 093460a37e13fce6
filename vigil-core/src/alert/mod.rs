//! Alert composition
//!
//! Turns a trigger plus the persisted contacts and location into the
//! request the backend expects, and describes how a dispatch ended.

pub mod outcome;
pub mod request;

pub use outcome::{AlertFailure, AlertOutcome, FAILED_NOTIFICATION, SENT_NOTIFICATION};
pub use request::{AlertError, AlertRequest, TriggerSource, MAX_MESSAGE_LEN};
