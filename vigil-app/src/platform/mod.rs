//! Host implementations of the platform collaborator traits

pub mod location;
pub mod notify;
pub mod replay;
pub mod transport;

pub use location::FixedLocation;
pub use notify::ConsoleNotifier;
pub use replay::TraceSensor;
pub use transport::DryRunTransport;
