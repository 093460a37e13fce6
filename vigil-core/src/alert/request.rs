//! Alert request composition

use core::fmt::{self, Write};

use heapless::{String, Vec};
use vigil_protocol::{EmailRequest, EncodeError};

use crate::config::MAX_USERNAME_LEN;
use crate::contacts::{ContactBook, MAX_CONTACTS, MAX_EMAIL_LEN};
use crate::location::LastKnownLocation;

/// Maximum `user_message` length
pub const MAX_MESSAGE_LEN: usize = 192;

/// What caused an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerSource {
    /// Shake gesture detected by the motion detector
    Shake,
    /// Explicit emergency action by the user
    Manual,
}

impl TriggerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerSource::Shake => "shake",
            TriggerSource::Manual => "manual",
        }
    }
}

/// Alert composition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertError {
    /// Contact book is empty; nobody to notify
    NoContacts,
    /// Manual alert without a known location
    NoLocation,
    /// Composed message does not fit [`MAX_MESSAGE_LEN`]
    MessageTooLong,
    /// Username does not fit [`MAX_USERNAME_LEN`]
    UsernameTooLong,
    /// Body does not fit the encode buffer
    Encode(EncodeError),
}

impl fmt::Display for AlertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertError::NoContacts => f.write_str("no emergency contacts"),
            AlertError::NoLocation => f.write_str("no known location"),
            AlertError::MessageTooLong => f.write_str("alert message too long"),
            AlertError::UsernameTooLong => f.write_str("username too long"),
            AlertError::Encode(e) => write!(f, "{e}"),
        }
    }
}

impl From<EncodeError> for AlertError {
    fn from(e: EncodeError) -> Self {
        AlertError::Encode(e)
    }
}

/// Alert request in the backend's shape
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertRequest {
    pub source: TriggerSource,
    pub username: String<MAX_USERNAME_LEN>,
    pub emergency_contacts: Vec<String<MAX_EMAIL_LEN>, MAX_CONTACTS>,
    pub user_message: String<MAX_MESSAGE_LEN>,
}

impl AlertRequest {
    /// Compose an alert
    ///
    /// Both sources require at least one contact. A manual alert also
    /// requires a location; a shake alert without one still goes out and
    /// says the location is unavailable.
    pub fn compose(
        source: TriggerSource,
        username: &str,
        contacts: &ContactBook,
        location: Option<&LastKnownLocation>,
    ) -> Result<Self, AlertError> {
        if contacts.is_empty() {
            return Err(AlertError::NoContacts);
        }
        if source == TriggerSource::Manual && location.is_none() {
            return Err(AlertError::NoLocation);
        }

        let mut name = String::new();
        name.push_str(username)
            .map_err(|_| AlertError::UsernameTooLong)?;

        // Book entries share the same bounds, so these pushes cannot fail
        let mut emergency_contacts = Vec::new();
        for email in contacts.emails() {
            let mut e = String::new();
            let _ = e.push_str(email);
            let _ = emergency_contacts.push(e);
        }

        Ok(Self {
            source,
            username: name,
            emergency_contacts,
            user_message: user_message(location)?,
        })
    }

    /// Borrow as the wire request
    pub fn to_wire(&self) -> EmailRequest<'_, String<MAX_EMAIL_LEN>> {
        EmailRequest {
            username: &self.username,
            emergency_contacts: &self.emergency_contacts,
            user_message: &self.user_message,
        }
    }

    /// Encode the JSON body into `buffer`, returning its length
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, AlertError> {
        Ok(self.to_wire().encode(buffer)?)
    }
}

fn user_message(location: Option<&LastKnownLocation>) -> Result<String<MAX_MESSAGE_LEN>, AlertError> {
    let mut message = String::new();
    let written = match location {
        Some(loc) => write!(
            message,
            "Emergency location data: Latitude {:.6}, Longitude {:.6}, Accuracy {:.1}",
            loc.latitude, loc.longitude, loc.accuracy
        ),
        None => write!(message, "Emergency location data: location unavailable"),
    };
    written.map_err(|_| AlertError::MessageTooLong)?;
    Ok(message)
}
