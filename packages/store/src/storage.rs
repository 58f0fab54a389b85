//! # Durable key-value storage for the session
//!
//! [`SessionStorage`] is the seam between the session store and whatever the
//! platform offers for surviving a reload: IndexedDB in the browser
//! ([`crate::IdbStorage`]), plain files on native ([`crate::FileStorage`]) and an
//! in-memory map for tests ([`crate::MemoryStorage`]).
//!
//! Values are opaque strings (the session store writes JSON). Every method is
//! fallible: private browsing, disabled storage permissions or a full quota all
//! surface as [`StorageError`], and callers decide how to degrade.

use std::future::Future;

/// Failure talking to a durable storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot be opened at all (disabled, private mode, no window).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A value was read but could not be decoded.
    #[error("corrupt stored value: {0}")]
    Corrupt(String),
}

/// Async key-value storage that outlives a page load.
pub trait SessionStorage {
    fn read(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>>;
    fn write(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>>;
    fn remove(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<(), StorageError>>;
}
