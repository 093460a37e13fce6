//! Configuration types
//!
//! Board-agnostic configuration structures. The host runtime parses them
//! from TOML; nothing here knows about files.

pub mod types;

pub use types::*;
