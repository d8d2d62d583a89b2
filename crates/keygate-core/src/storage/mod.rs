//! Persistence slot for registered accounts.
//!
//! The store keeps its persisted accounts in a single named entry holding a
//! JSON array. Each successful registration replaces the whole entry.
//!
//! Nothing coordinates concurrent writers: two processes sharing a
//! [`FileSlot`] follow last-writer-wins.

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::StorageResult;

/// Name of the entry holding the persisted accounts.
pub const USERS_SLOT: &str = "users";

/// A single key-value entry the credential store reads and writes.
pub trait PersistenceSlot {
    /// Reads the entry.
    ///
    /// Returns `Ok(None)` if the entry has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replaces the entry with `contents`.
    ///
    /// On error the previous value must remain in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn write(&mut self, contents: &str) -> StorageResult<()>;
}
