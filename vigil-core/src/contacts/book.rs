//! Contact book

use core::fmt;

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum contacts kept
pub const MAX_CONTACTS: usize = 8;

/// Maximum contact name length
pub const MAX_NAME_LEN: usize = 32;

/// Maximum e-mail address length
pub const MAX_EMAIL_LEN: usize = 64;

/// Maximum phone number length
pub const MAX_PHONE_LEN: usize = 24;

/// Contact field, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContactField {
    Name,
    Email,
    PhoneNumber,
}

impl ContactField {
    /// Human-readable field name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::PhoneNumber => "phone number",
        }
    }
}

/// Contact book errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContactError {
    /// A required field is empty
    MissingField(ContactField),
    /// A field exceeds its bound
    FieldTooLong(ContactField),
    /// The book already holds [`MAX_CONTACTS`] entries
    Full,
    /// No contact at the given index
    IndexOutOfRange,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "missing {}", field.as_str()),
            ContactError::FieldTooLong(field) => write!(f, "{} too long", field.as_str()),
            ContactError::Full => write!(f, "contact list is full ({MAX_CONTACTS} max)"),
            ContactError::IndexOutOfRange => f.write_str("no contact at that index"),
        }
    }
}

/// One emergency contact
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmergencyContact {
    pub name: String<MAX_NAME_LEN>,
    pub email: String<MAX_EMAIL_LEN>,
    pub phone_number: String<MAX_PHONE_LEN>,
}

impl EmergencyContact {
    /// Build a contact from user input
    ///
    /// Surrounding whitespace is trimmed. All three fields are required.
    pub fn new(name: &str, email: &str, phone_number: &str) -> Result<Self, ContactError> {
        Ok(Self {
            name: field(name, ContactField::Name)?,
            email: field(email, ContactField::Email)?,
            phone_number: field(phone_number, ContactField::PhoneNumber)?,
        })
    }

    /// Check the invariants [`new`](Self::new) enforces
    ///
    /// Used for contacts that did not come through `new`, such as
    /// deserialized records.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (value, which) in [
            (self.name.as_str(), ContactField::Name),
            (self.email.as_str(), ContactField::Email),
            (self.phone_number.as_str(), ContactField::PhoneNumber),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(which));
            }
        }
        Ok(())
    }
}

fn field<const N: usize>(value: &str, which: ContactField) -> Result<String<N>, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(which));
    }
    let mut out = String::new();
    out.push_str(value)
        .map_err(|_| ContactError::FieldTooLong(which))?;
    Ok(out)
}

/// Ordered list of emergency contacts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactBook {
    contacts: Vec<EmergencyContact, MAX_CONTACTS>,
}

impl ContactBook {
    /// Create an empty book
    pub const fn new() -> Self {
        Self { contacts: Vec::new() }
    }

    /// Append a contact, returning its index
    pub fn add(&mut self, contact: EmergencyContact) -> Result<usize, ContactError> {
        contact.validate()?;
        self.contacts
            .push(contact)
            .map_err(|_| ContactError::Full)?;
        Ok(self.contacts.len() - 1)
    }

    /// Remove the contact at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Result<EmergencyContact, ContactError> {
        if index >= self.contacts.len() {
            return Err(ContactError::IndexOutOfRange);
        }
        Ok(self.contacts.remove(index))
    }

    /// Contact at `index`
    pub fn get(&self, index: usize) -> Option<&EmergencyContact> {
        self.contacts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmergencyContact> {
        self.contacts.iter()
    }

    /// E-mail addresses in list order
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.contacts.iter().map(|c| c.email.as_str())
    }

    pub fn as_slice(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.contacts.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> EmergencyContact {
        let email = std::format!("{}@example.com", name.to_lowercase());
        EmergencyContact::new(name, &email, "+1 555 0100").unwrap()
    }

    #[test]
    fn test_error_display_names_field() {
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "missing email"
        );
        assert_eq!(
            ContactError::FieldTooLong(ContactField::PhoneNumber).to_string(),
            "phone number too long"
        );
        assert_eq!(ContactError::Full.to_string(), "contact list is full (8 max)");
    }

    #[test]
    fn test_new_trims_fields() {
        let c = EmergencyContact::new("  Alex ", " alex@example.com", "555\n").unwrap();
        assert_eq!(c.name.as_str(), "Alex");
        assert_eq!(c.email.as_str(), "alex@example.com");
        assert_eq!(c.phone_number.as_str(), "555");
    }

    #[test]
    fn test_new_requires_every_field() {
        assert_eq!(
            EmergencyContact::new("", "a@b.c", "1"),
            Err(ContactError::MissingField(ContactField::Name))
        );
        assert_eq!(
            EmergencyContact::new("A", "   ", "1"),
            Err(ContactError::MissingField(ContactField::Email))
        );
        assert_eq!(
            EmergencyContact::new("A", "a@b.c", ""),
            Err(ContactError::MissingField(ContactField::PhoneNumber))
        );
    }

    #[test]
    fn test_new_rejects_long_fields() {
        let long = "x".repeat(MAX_EMAIL_LEN + 1);
        assert_eq!(
            EmergencyContact::new("A", &long, "1"),
            Err(ContactError::FieldTooLong(ContactField::Email))
        );
        let name = "n".repeat(MAX_NAME_LEN);
        assert!(EmergencyContact::new(&name, "a@b.c", "1").is_ok());
    }

    #[test]
    fn test_add_preserves_order() {
        let mut book = ContactBook::new();
        assert_eq!(book.add(contact("Ana")), Ok(0));
        assert_eq!(book.add(contact("Ben")), Ok(1));
        assert_eq!(book.add(contact("Cy")), Ok(2));

        let emails: std::vec::Vec<&str> = book.emails().collect();
        assert_eq!(emails, ["ana@example.com", "ben@example.com", "cy@example.com"]);
    }

    #[test]
    fn test_remove_keeps_rest_in_order() {
        let mut book = ContactBook::new();
        for name in ["Ana", "Ben", "Cy"] {
            book.add(contact(name)).unwrap();
        }

        let removed = book.remove(1).unwrap();
        assert_eq!(removed.name.as_str(), "Ben");
        assert_eq!(book.len(), 2);
        assert_eq!(book.get(0).unwrap().name.as_str(), "Ana");
        assert_eq!(book.get(1).unwrap().name.as_str(), "Cy");

        assert_eq!(book.remove(2), Err(ContactError::IndexOutOfRange));
    }

    #[test]
    fn test_full_book_rejects() {
        let mut book = ContactBook::new();
        for i in 0..MAX_CONTACTS {
            book.add(contact(&std::format!("C{i}"))).unwrap();
        }
        assert!(book.is_full());
        assert_eq!(book.add(contact("Extra")), Err(ContactError::Full));
        assert_eq!(book.len(), MAX_CONTACTS);
    }

    #[test]
    fn test_add_rejects_blank_record() {
        let mut book = ContactBook::new();
        let blank = EmergencyContact {
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
        };
        assert_eq!(
            book.add(blank),
            Err(ContactError::MissingField(ContactField::Name))
        );
        assert!(book.is_empty());
    }
}
