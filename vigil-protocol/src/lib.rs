//! Alert Backend Protocol
//!
//! This crate defines the contract between the safety monitor and the
//! hosted alert backend that fans an emergency out to e-mail contacts.
//!
//! # Protocol Overview
//!
//! An alert is a single HTTP request:
//! ```text
//! POST https://emergencytracker-rm8r.onrender.com/mail/send/
//! Content-Type: application/json
//!
//! {"username":"User","emergency_contacts":["a@b.c"],"user_message":"..."}
//! ```
//!
//! The request is fire-and-forget: the monitor reports success or failure
//! to the user once and never retries.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod endpoint;
pub mod request;

pub use endpoint::{CONTENT_TYPE_JSON, DEFAULT_ENDPOINT, MAX_ENDPOINT_LEN, METHOD};
pub use request::{EmailRequest, EncodeError, MAX_BODY_SIZE};
