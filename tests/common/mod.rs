//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use spillpay::cache::CACHED_NAMES_SLOT;
use spillpay::roster::{Order, Participant, ParticipantStore};
use spillpay::storage::FileSlotStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A file slot store rooted in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_slots() -> (TempDir, FileSlotStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let slots = FileSlotStore::new(dir.path());
    (dir, slots)
}

/// Write raw bytes where the names cache lives in `dir`.
pub fn write_names_cache(dir: &Path, bytes: &[u8]) -> PathBuf {
    let path = FileSlotStore::new(dir).slot_path(CACHED_NAMES_SLOT);
    std::fs::write(&path, bytes).expect("Failed to write names cache");
    path
}

/// Open a store over the file cache in `dir`, as a fresh session would.
pub fn open_store(dir: &Path) -> ParticipantStore {
    ParticipantStore::load(Box::new(FileSlotStore::new(dir)))
}

pub fn person(name: &str, order: f64) -> Participant {
    Participant::new(name).with_order(Order::new(order).expect("valid order"))
}

pub fn names(store: &ParticipantStore) -> Vec<String> {
    store
        .participants()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}
