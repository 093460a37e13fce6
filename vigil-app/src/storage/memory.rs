//! In-memory storage
//!
//! Volatile backend for tests and dry runs. Can be told to fail writes to
//! exercise error paths.

use std::collections::HashMap;

use vigil_hal::{KeyValueStorage, StorageError, StorageKey};

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<StorageKey, Vec<u8>>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail with [`StorageError::Io`]
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Store raw bytes, bypassing the record layer
    pub fn insert_raw(&mut self, key: StorageKey, data: &[u8]) {
        self.entries.insert(key, data.to_vec());
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let data = self.entries.get(&key).ok_or(StorageError::NotFound)?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        self.entries.insert(key, data.to_vec());
        Ok(())
    }

    async fn exists(&mut self, key: StorageKey) -> bool {
        self.entries.contains_key(&key)
    }

    async fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        self.entries.remove(&key);
        Ok(())
    }
}
