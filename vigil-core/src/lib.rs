//! Board-agnostic core logic for the safety monitor
//!
//! This crate contains all application logic that does not depend on
//! a specific platform:
//!
//! - Shake detection over accelerometer samples
//! - Emergency contact list and last known location
//! - Alert composition in the backend's shape
//! - Session state machine
//! - Configuration type definitions
//! - Platform collaborator traits (sensor, location, transport, notifier)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alert;
pub mod config;
pub mod contacts;
pub mod location;
pub mod motion;
pub mod state;
pub mod traits;
