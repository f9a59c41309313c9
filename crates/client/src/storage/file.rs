//! File-backed storage.
//!
//! Each slot is a file `<dir>/<key>.json`. Writes go to a temporary sibling
//! file that is then renamed over the slot, so a crash mid-write leaves the
//! previous content intact.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use arcana_cart_core::{CartStorage, StorageError};

const SLOT_EXTENSION: &str = "json";

/// Storage keeping each slot in its own file under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create storage rooted at `dir`. The directory is created on first
    /// write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{SLOT_EXTENSION}"))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{key}.{SLOT_EXTENSION}.tmp"))
    }
}

impl CartStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;

        let temp = self.temp_path_for(key);
        fs::write(&temp, value)?;
        fs::rename(&temp, self.path_for(key))?;

        tracing::debug!(path = %self.path_for(key).display(), bytes = value.len(), "Wrote cart slot");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
