//! Vigil host runtime
//!
//! Runs the board-agnostic monitor on a desktop host: replays recorded
//! accelerometer traces through the shake detector, keeps contacts and
//! the last known location on disk, and dispatches alerts through a
//! dry-run transport.
//!
//! # Usage
//!
//! ```bash
//! # Add someone to notify
//! vigil contacts add --name "Sam" --email sam@example.com --phone "+1 555 0100"
//!
//! # Record where we are
//! vigil location set --lat 37.7749 --lon -122.4194 --accuracy 12
//!
//! # Replay a trace; five hard shakes raise an alert
//! vigil monitor --trace walk.csv
//!
//! # Raise an alert by hand
//! vigil alert
//! ```

pub mod channels;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod session;
pub mod storage;
pub mod tasks;

pub use cli::{Cli, Commands};
pub use error::AppError;
