//! Platform collaborator traits
//!
//! These traits define the interface between the monitor logic and
//! whatever supplies samples, position fixes, network delivery and user
//! notifications on a given platform.

pub mod location;
pub mod notify;
pub mod sensor;
pub mod transport;

pub use location::{FixError, LocationProvider};
pub use notify::Notifier;
pub use sensor::{MotionSensor, SensorError};
pub use transport::{AlertTransport, TransportError};
