//! Persistent storage
//!
//! Backends for [`KeyValueStorage`](vigil_hal::KeyValueStorage) and the
//! record layer that stores contacts and the last known location on top
//! of them.

pub mod file;
pub mod memory;
pub mod records;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use records::{load_contacts, load_location, save_contacts, save_location, RecordError};
