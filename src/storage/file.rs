use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use fs2::FileExt;

use super::{SlotStore, StorageError};

/// Stores each slot as `<dir>/<slot>.json`.
///
/// Writes go to a sibling temp file which is renamed over the slot while an
/// exclusive advisory lock is held.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory: `<data_dir>/spillpay`, or `./spillpay`
    /// when the platform has no data directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spillpay")
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    fn write_locked(&self, slot: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(format!(".{slot}.lock")))?;
        FileExt::lock_exclusive(&lock)?;

        let target = self.slot_path(slot);
        let tmp = self.dir.join(format!(".{slot}.json.tmp"));
        let result = (|| {
            let mut file = File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &target)
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        // Lock is released when `lock` is dropped.
        result
    }
}

impl SlotStore for FileSlotStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn read(&self, slot: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.slot_path(slot);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                slot: slot.to_string(),
                path,
                source,
            }),
        }
    }

    fn write(&mut self, slot: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.write_locked(slot, bytes)
            .map_err(|source| StorageError::Write {
                slot: slot.to_string(),
                path: self.slot_path(slot),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn slot_path_uses_json_extension() {
        let store = FileSlotStore::new("/tmp/spillpay");
        assert_eq!(
            store.slot_path("cachedNames"),
            PathBuf::from("/tmp/spillpay/cachedNames.json")
        );
    }

    #[test]
    fn read_missing_slot_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FileSlotStore::new(temp.path());
        assert!(store.read("cachedNames").unwrap().is_none());
    }

    #[test]
    fn write_creates_directory_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("data");
        let mut store = FileSlotStore::new(&dir);

        store.write("cachedNames", b"[]").unwrap();

        assert_eq!(fs::read(dir.join("cachedNames.json")).unwrap(), b"[]");
        assert!(!dir.join(".cachedNames.json.tmp").exists());
    }
}
