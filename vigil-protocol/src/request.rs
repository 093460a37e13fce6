//! E-mail alert request body
//!
//! The backend expects a JSON object with exactly three keys, in this order:
//! - `username`: display name of the person in distress
//! - `emergency_contacts`: array of e-mail addresses
//! - `user_message`: free text, carries the location

use core::fmt;

use alloc::vec::Vec;
use serde::{Serialize, Serializer};

/// Maximum encoded body size in bytes
pub const MAX_BODY_SIZE: usize = 1024;

/// Errors that can occur while encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer cannot hold the encoded document
    BufferTooSmall,
    /// Serializer rejected the request
    Serialize,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::BufferTooSmall => f.write_str("request body too large"),
            EncodeError::Serialize => f.write_str("request body could not be serialized"),
        }
    }
}

/// Alert request as sent to the backend
///
/// Borrows its fields so callers can encode straight from their own
/// bounded storage. Field order is the wire key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct EmailRequest<'a, S: AsRef<str>> {
    /// Sender name shown in the e-mail
    pub username: &'a str,
    /// Recipient e-mail addresses
    #[serde(serialize_with = "serialize_contacts")]
    pub emergency_contacts: &'a [S],
    /// Message body
    pub user_message: &'a str,
}

fn serialize_contacts<S, Ser>(contacts: &&[S], serializer: Ser) -> Result<Ser::Ok, Ser::Error>
where
    S: AsRef<str>,
    Ser: Serializer,
{
    serializer.collect_seq(contacts.iter().map(<S as AsRef<str>>::as_ref))
}

impl<'a, S: AsRef<str>> EmailRequest<'a, S> {
    /// Serialize this request as a JSON body
    pub fn to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(|_| EncodeError::Serialize)
    }

    /// Encode this request into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        let body = self.to_vec()?;
        let slot = buffer
            .get_mut(..body.len())
            .ok_or(EncodeError::BufferTooSmall)?;
        slot.copy_from_slice(&body);
        Ok(body.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str<S: AsRef<str>>(request: &EmailRequest<'_, S>) -> String {
        let mut buffer = [0u8; MAX_BODY_SIZE];
        let len = request.encode(&mut buffer).unwrap();
        String::from_utf8(buffer[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_encode_shape() {
        let request = EmailRequest {
            username: "User",
            emergency_contacts: &["a@example.com", "b@example.com"][..],
            user_message: "Emergency location data: Latitude 1, Longitude 2, Accuracy 3",
        };
        assert_eq!(
            encode_str(&request),
            "{\"username\":\"User\",\
             \"emergency_contacts\":[\"a@example.com\",\"b@example.com\"],\
             \"user_message\":\"Emergency location data: Latitude 1, Longitude 2, Accuracy 3\"}"
        );
    }

    #[test]
    fn test_encode_no_contacts() {
        let contacts: [&str; 0] = [];
        let request = EmailRequest {
            username: "User",
            emergency_contacts: &contacts[..],
            user_message: "",
        };
        assert_eq!(
            encode_str(&request),
            "{\"username\":\"User\",\"emergency_contacts\":[],\"user_message\":\"\"}"
        );
    }

    #[test]
    fn test_encode_owned_contacts() {
        let contacts = [String::from("x@y.z")];
        let request = EmailRequest {
            username: "User",
            emergency_contacts: &contacts[..],
            user_message: "hi",
        };
        assert!(encode_str(&request).contains("\"emergency_contacts\":[\"x@y.z\"]"));
    }

    #[test]
    fn test_encode_escapes_user_text() {
        let request = EmailRequest {
            username: "Jo \"JJ\"",
            emergency_contacts: &["x@y.z"][..],
            user_message: "line1\nline2\\\u{1}",
        };
        let body = encode_str(&request);
        assert!(body.contains("\"Jo \\\"JJ\\\"\""));
        assert!(body.contains("line1\\nline2\\\\\\u0001"));
    }

    #[test]
    fn test_encode_buffer_too_small() {
        let request = EmailRequest {
            username: "User",
            emergency_contacts: &["a@example.com"][..],
            user_message: "hello",
        };
        let mut buffer = [0u8; 20];
        assert_eq!(request.encode(&mut buffer), Err(EncodeError::BufferTooSmall));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_body_parses_back_to_fields(
                username in "\\PC{0,24}",
                message in "[ -~\\n\\t\\r]{0,120}",
            ) {
                let request = EmailRequest {
                    username: &username,
                    emergency_contacts: &["a@example.com"][..],
                    user_message: &message,
                };
                let body = encode_str(&request);
                let prefix = "{\"username\":\"";
                prop_assert!(body.starts_with(prefix));
                prop_assert!(body.bytes().all(|b| b >= 0x20));

                let value: serde_json::Value = serde_json::from_str(&body).unwrap();
                prop_assert_eq!(value["username"].as_str(), Some(username.as_str()));
                prop_assert_eq!(value["user_message"].as_str(), Some(message.as_str()));
                prop_assert_eq!(value["emergency_contacts"][0].as_str(), Some("a@example.com"));
            }
        }
    }
}
