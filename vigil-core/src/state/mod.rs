//! Session state machine
//!
//! Tracks whether the monitor is attached to its sample stream and how
//! many alerts are in flight. The state is a function of the previous
//! state and an event; nothing else changes it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
