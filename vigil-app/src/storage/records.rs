//! Persisted records
//!
//! Contacts and the last known location are stored as postcard-encoded
//! records with a magic/version header. A record that fails to decode or
//! validate loads as absent, so a corrupt file never blocks an alert.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use vigil_core::contacts::ContactBook;
use vigil_core::location::LastKnownLocation;
use vigil_hal::{KeyValueStorage, StorageError, StorageKey};

/// Record header magic ("VGIL")
pub const RECORD_MAGIC: u32 = 0x5647_494C;

/// Current record layout version
pub const RECORD_VERSION: u8 = 1;

/// Maximum serialized record size
const MAX_RECORD_SIZE: usize = 2048;

/// Record persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("storage error: {0}")]
    Storage(StorageError),
    #[error("record could not be serialized")]
    Serialize,
    #[error("record could not be decoded")]
    Deserialize,
    /// Wrong magic or version
    #[error("record has an unknown format")]
    InvalidFormat,
    /// Decoded but failed validation
    #[error("record holds invalid data")]
    Invalid,
}

impl From<StorageError> for RecordError {
    fn from(e: StorageError) -> Self {
        RecordError::Storage(e)
    }
}

#[derive(Serialize, Deserialize)]
struct Record<T> {
    magic: u32,
    version: u8,
    body: T,
}

async fn load_record<S, T>(storage: &mut S, key: StorageKey) -> Result<T, RecordError>
where
    S: KeyValueStorage,
    T: DeserializeOwned,
{
    let mut buffer = [0u8; MAX_RECORD_SIZE];
    let len = storage.read(key, &mut buffer).await?;

    debug!(key = key.name(), bytes = len, "Read record");

    let record: Record<T> =
        postcard::from_bytes(&buffer[..len]).map_err(|_| RecordError::Deserialize)?;

    if record.magic != RECORD_MAGIC || record.version != RECORD_VERSION {
        warn!(
            key = key.name(),
            magic = record.magic,
            version = record.version,
            "Record format mismatch"
        );
        return Err(RecordError::InvalidFormat);
    }

    Ok(record.body)
}

async fn save_record<S, T>(storage: &mut S, key: StorageKey, body: &T) -> Result<(), RecordError>
where
    S: KeyValueStorage,
    T: Serialize,
{
    let record = Record {
        magic: RECORD_MAGIC,
        version: RECORD_VERSION,
        body,
    };

    let mut buffer = [0u8; MAX_RECORD_SIZE];
    let bytes = postcard::to_slice(&record, &mut buffer).map_err(|_| RecordError::Serialize)?;

    debug!(key = key.name(), bytes = bytes.len(), "Saving record");

    storage.write(key, bytes).await?;
    Ok(())
}

/// Load the contact book
///
/// Returns an empty book if none is stored or the record is unusable.
pub async fn load_contacts<S: KeyValueStorage>(storage: &mut S) -> ContactBook {
    let result = load_record::<_, ContactBook>(storage, StorageKey::EmergencyContacts)
        .await
        .and_then(|book| {
            if book.iter().all(|c| c.validate().is_ok()) {
                Ok(book)
            } else {
                Err(RecordError::Invalid)
            }
        });

    match result {
        Ok(book) => {
            debug!(count = book.len(), "Loaded emergency contacts");
            book
        }
        Err(RecordError::Storage(StorageError::NotFound)) => {
            debug!("No emergency contacts stored");
            ContactBook::new()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load emergency contacts, treating as empty");
            ContactBook::new()
        }
    }
}

/// Save the contact book, replacing the stored one
pub async fn save_contacts<S: KeyValueStorage>(
    storage: &mut S,
    book: &ContactBook,
) -> Result<(), RecordError> {
    save_record(storage, StorageKey::EmergencyContacts, book).await?;
    info!(count = book.len(), "Saved emergency contacts");
    Ok(())
}

/// Load the last known location, if one is stored and valid
pub async fn load_location<S: KeyValueStorage>(storage: &mut S) -> Option<LastKnownLocation> {
    let result = load_record::<_, LastKnownLocation>(storage, StorageKey::LocationData)
        .await
        .and_then(|loc| loc.validate().map(|()| loc).map_err(|_| RecordError::Invalid));

    match result {
        Ok(location) => Some(location),
        Err(RecordError::Storage(StorageError::NotFound)) => {
            debug!("No location stored");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to load last known location, treating as unknown");
            None
        }
    }
}

/// Save a location snapshot, overwriting the previous one
pub async fn save_location<S: KeyValueStorage>(
    storage: &mut S,
    location: &LastKnownLocation,
) -> Result<(), RecordError> {
    save_record(storage, StorageKey::LocationData, location).await?;
    debug!(
        latitude = location.latitude,
        longitude = location.longitude,
        accuracy = location.accuracy,
        "Saved location"
    );
    Ok(())
}
