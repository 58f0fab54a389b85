//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is the [`SessionStorage`] implementation used on desktop and
//! other native targets. Each key is one file holding the raw value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json        # e.g. codeflix-session.json
//! ```
//!
//! Use [`dirs::data_dir()`] joined with `codeflix` for a platform-appropriate
//! base (the `ui` crate does this).
//!
//! A missing file reads as `None`; removing a missing file is not an error.

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{SessionStorage, StorageError};

/// Filesystem-backed SessionStorage for native targets.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Unavailable(format!("invalid storage key: {key:?}")));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.key_path(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
