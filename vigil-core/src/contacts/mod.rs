//! Emergency contacts
//!
//! An ordered, bounded list of people to notify when an alert fires.
//! Order is the order contacts were added; removal keeps the rest in place.

pub mod book;

pub use book::{
    ContactBook, ContactError, ContactField, EmergencyContact, MAX_CONTACTS, MAX_EMAIL_LEN,
    MAX_NAME_LEN, MAX_PHONE_LEN,
};
