//! Alert delivery trait

use core::future::Future;

/// Errors delivering an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Backend could not be reached
    Unreachable,
    /// Backend answered with a non-success status
    Rejected(u16),
    /// No answer in time
    Timeout,
    /// Local I/O failure
    Io,
}

/// Delivers an encoded alert body to the backend
///
/// One call is one attempt. Retrying is not the transport's job.
pub trait AlertTransport {
    /// POST `body` (JSON) to `endpoint`
    fn post(&mut self, endpoint: &str, body: &[u8])
        -> impl Future<Output = Result<(), TransportError>>;
}
