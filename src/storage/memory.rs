use std::collections::HashMap;

use super::{SlotStore, StorageError};

/// In-process slot store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySlotStore {
    slots: HashMap<String, Vec<u8>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot, e.g. with a previously captured cache.
    pub fn with_slot(mut self, slot: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.slots.insert(slot.to_string(), bytes.into());
        self
    }
}

impl SlotStore for MemorySlotStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_none() {
        let store = MemorySlotStore::new();
        assert_eq!(store.read("cachedNames").unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let mut store = MemorySlotStore::new().with_slot("cachedNames", b"old".to_vec());
        store.write("cachedNames", b"new").unwrap();
        assert_eq!(store.read("cachedNames").unwrap(), Some(b"new".to_vec()));
    }
}
