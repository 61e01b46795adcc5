//! Named-slot byte storage.
//!
//! A slot is a small, named byte value that survives restarts (the names
//! cache lives in one). Writers overwrite the whole slot; a missing slot
//! reads as `None`.

mod file;
mod memory;

pub use file::FileSlotStore;
pub use memory::MemorySlotStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing a slot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read slot '{slot}' from '{path}': {source}")]
    Read {
        slot: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write slot '{slot}' to '{path}': {source}")]
    Write {
        slot: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Durable storage addressed by slot name.
///
/// Implementations must make `write` all-or-nothing: after a failed write
/// the previous value is still readable.
pub trait SlotStore {
    /// Returns the name of this store for logging.
    fn name(&self) -> &'static str;

    /// Read the raw bytes of a slot, `None` if it was never written.
    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the contents of a slot.
    fn write(&mut self, slot: &str, bytes: &[u8]) -> Result<(), StorageError>;
}
