//! File-backed storage
//!
//! One file per key under a data directory, named after
//! [`StorageKey::name`]. Writes go to a temporary file that is renamed
//! over the old one, so a completed write replaces the value as a whole.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vigil_hal::{KeyValueStorage, StorageError, StorageKey};

/// Directory of per-key files
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "Opened file storage");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StorageKey) -> PathBuf {
        self.dir.join(key.name())
    }
}

fn io_error(key: StorageKey, e: std::io::Error) -> StorageError {
    if e.kind() == ErrorKind::NotFound {
        return StorageError::NotFound;
    }
    warn!(key = key.name(), error = %e, "Storage I/O failed");
    StorageError::Io
}

impl KeyValueStorage for FileStorage {
    async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, StorageError> {
        let data = fs::read(self.path(key)).map_err(|e| io_error(key, e))?;
        if data.len() > buffer.len() {
            return Err(StorageError::BufferTooSmall);
        }
        buffer[..data.len()].copy_from_slice(&data);
        Ok(data.len())
    }

    async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, data).map_err(|e| io_error(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_error(key, e))?;
        debug!(key = key.name(), bytes = data.len(), "Wrote record");
        Ok(())
    }

    async fn exists(&mut self, key: StorageKey) -> bool {
        self.path(key).is_file()
    }

    async fn remove(&mut self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(key, e)),
        }
    }
}
