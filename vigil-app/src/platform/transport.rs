//! Dry-run alert transport
//!
//! Logs the request it would POST instead of touching the network. Keeps
//! every body it was given so callers can inspect what went out.

use tracing::{info, warn};
use vigil_core::traits::{AlertTransport, TransportError};
use vigil_protocol::{CONTENT_TYPE_JSON, METHOD};

/// One request the transport accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub endpoint: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct DryRunTransport {
    sent: Vec<SentRequest>,
    fail_with: Option<TransportError>,
}

impl DryRunTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that rejects every request with `error`
    pub fn failing(error: TransportError) -> Self {
        Self {
            sent: Vec::new(),
            fail_with: Some(error),
        }
    }

    /// Stop (or start) failing requests
    pub fn set_failure(&mut self, error: Option<TransportError>) {
        self.fail_with = error;
    }

    pub fn sent(&self) -> &[SentRequest] {
        &self.sent
    }
}

impl AlertTransport for DryRunTransport {
    async fn post(&mut self, endpoint: &str, body: &[u8]) -> Result<(), TransportError> {
        if let Some(error) = self.fail_with {
            warn!(endpoint, ?error, "Dry run: simulating delivery failure");
            return Err(error);
        }

        let body = String::from_utf8_lossy(body).into_owned();
        info!(
            method = METHOD,
            endpoint,
            content_type = CONTENT_TYPE_JSON,
            body = %body,
            "Dry run: alert request not sent"
        );
        self.sent.push(SentRequest {
            endpoint: endpoint.to_owned(),
            body,
        });
        Ok(())
    }
}
