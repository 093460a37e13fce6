//! Persistent key-value storage abstractions
//!
//! Provides the trait for durable key-value storage that platform
//! backends implement (app sandbox files, flash, browser storage, ...).

/// Storage keys for persisted user data
///
/// These keys identify the records the monitor keeps between sessions.
/// The backend decides how a key maps onto its medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageKey {
    /// Ordered emergency contact list
    EmergencyContacts,
    /// Last known location snapshot
    LocationData,
}

impl StorageKey {
    /// Stable textual name of the key
    ///
    /// Backends that store one entry per file or per named slot use this
    /// as the entry name.
    pub fn name(self) -> &'static str {
        match self {
            StorageKey::EmergencyContacts => "emergencyContacts",
            StorageKey::LocationData => "locationData",
        }
    }
}

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Underlying medium failed (I/O, flash, ...)
    Io,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Storage is full
    Full,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StorageError::Io => f.write_str("storage I/O failure"),
            StorageError::NotFound => f.write_str("no such entry"),
            StorageError::BufferTooSmall => f.write_str("entry larger than read buffer"),
            StorageError::Full => f.write_str("storage full"),
        }
    }
}

/// Durable key-value storage trait
///
/// Implementations should make a completed `write` survive a restart and
/// should replace the previous value of the key as a whole.
pub trait KeyValueStorage {
    /// Read a value by key into the provided buffer
    ///
    /// # Arguments
    /// * `key` - The storage key to read
    /// * `buffer` - Buffer to read data into
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(
        &mut self,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, StorageError>>;

    /// Write a value by key, replacing any previous value
    fn write(
        &mut self,
        key: StorageKey,
        data: &[u8],
    ) -> impl core::future::Future<Output = Result<(), StorageError>>;

    /// Check if a key exists in storage
    fn exists(&mut self, key: StorageKey) -> impl core::future::Future<Output = bool>;

    /// Remove a key
    ///
    /// Removing a key that does not exist is not an error.
    fn remove(&mut self, key: StorageKey)
        -> impl core::future::Future<Output = Result<(), StorageError>>;
}
