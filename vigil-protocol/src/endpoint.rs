//! Backend endpoint constants

/// Mail-send endpoint of the hosted alert backend
pub const DEFAULT_ENDPOINT: &str = "https://emergencytracker-rm8r.onrender.com/mail/send/";

/// HTTP method used for alert requests
pub const METHOD: &str = "POST";

/// Content type of the request body
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Maximum endpoint URL length accepted by configuration
pub const MAX_ENDPOINT_LEN: usize = 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_fits() {
        assert!(DEFAULT_ENDPOINT.len() <= MAX_ENDPOINT_LEN);
        assert!(DEFAULT_ENDPOINT.starts_with("https://"));
        assert!(DEFAULT_ENDPOINT.ends_with('/'));
    }
}
