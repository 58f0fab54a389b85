use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::storage::{SessionStorage, StorageError};

/// In-memory storage for tests and as a fallback when nothing durable exists.
///
/// Clones share the same map, so a second store built from a clone observes
/// what the first one persisted (a "reload"). [`MemoryStorage::set_available`]
/// simulates storage that the browser refuses to open.
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    available: Arc<AtomicBool>,
    reads: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self {
            entries: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
            reads: Arc::default(),
            writes: Arc::default(),
        }
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that fails every operation.
    pub fn unavailable() -> Self {
        let storage = Self::default();
        storage.set_available(false);
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Raw value under `key`, bypassing availability.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Seed a raw value, bypassing availability.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Number of read attempts so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write and remove attempts so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable("memory storage disabled".to_string()))
        }
    }
}

impl SessionStorage for MemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
