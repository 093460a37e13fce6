//! Vigil Platform Abstraction Layer
//!
//! This crate defines the platform traits that the safety monitor needs
//! from whatever device it runs on. Application code is written against
//! these traits so the same logic runs on a phone bridge, a wearable or
//! a host replay harness.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (vigil-app, etc.)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vigil-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  file-backed  │       │   in-memory   │
//! │    storage    │       │    storage    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`storage::KeyValueStorage`] - Durable key-value storage

#![no_std]
#![deny(unsafe_code)]

pub mod storage;

// Re-export key traits at crate root for convenience
pub use storage::{KeyValueStorage, StorageError, StorageKey};
