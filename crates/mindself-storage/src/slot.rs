use std::collections::HashMap;
use std::path::{Path, PathBuf};

use mindself_core::slot_keys;

use crate::error::StorageError;

/// A flat key-value store holding whole serialized values, like browser
/// local storage. There is no locking: the last write wins.
pub trait Slot {
    /// Read the value under `key`, `None` if nothing was ever written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn write(&mut self, key: &str, body: &[u8]) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(slot_keys::slot_file(key))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl Slot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path(key);
        match std::fs::read(&path) {
            Ok(body) => Ok(Some(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path)(e)),
        }
    }

    /// Write to a temp file, then rename over the slot file.
    fn write(&mut self, key: &str, body: &[u8]) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(io_error(&self.dir))?;

        let path = self.path(key);
        let tmp_path = self.dir.join(slot_keys::slot_tmp_file(key));
        std::fs::write(&tmp_path, body).map_err(io_error(&tmp_path))?;

        // Set restrictive permissions on Unix before renaming
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .map_err(io_error(&tmp_path))?;
        }

        std::fs::rename(&tmp_path, &path).map_err(io_error(&path))?;
        tracing::debug!(path = %path.display(), bytes = body.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "slot removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path)(e)),
        }
    }
}

/// Process-local slot, for tests and for front ends that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, body: &[u8]) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), body.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
