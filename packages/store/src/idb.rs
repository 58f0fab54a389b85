//! # IndexedDB session storage (web)
//!
//! [`IdbStorage`] is the [`SessionStorage`] implementation used in the browser.
//! It keeps string values in a single IndexedDB object store through the
//! [`rexie`] crate.
//!
//! ## Database schema
//!
//! | Database | Version | Object store | Key | Value |
//! |----------|---------|--------------|-----|-------|
//! | `"codeflix"` | 1 | `"kv"` | storage key (e.g. `"codeflix-session"`) | JSON string |
//!
//! A fresh [`Rexie`] connection is opened per operation; `Rexie` is not `Clone`
//! and the browser caches the underlying connection.
//!
//! Failures are reported, not swallowed. When IndexedDB is
//! disabled (private mode, blocked permissions) `open_db` fails and every call
//! returns [`StorageError::Unavailable`]; the session store degrades from there.

use crate::storage::{SessionStorage, StorageError};
use rexie::{ObjectStore as RexieObjectStore, Rexie, TransactionMode};
use wasm_bindgen::JsValue;

const DB_NAME: &str = "codeflix";
const DB_VERSION: u32 = 1;
const KV_STORE: &str = "kv";

/// IndexedDB-backed SessionStorage for the web platform.
#[derive(Clone, Default)]
pub struct IdbStorage;

impl IdbStorage {
    pub fn new() -> Self {
        Self
    }

    async fn open_db(&self) -> Result<Rexie, StorageError> {
        Rexie::builder(DB_NAME)
            .version(DB_VERSION)
            .add_object_store(RexieObjectStore::new(KV_STORE))
            .build()
            .await
            .map_err(unavailable)
    }
}

fn unavailable(e: rexie::Error) -> StorageError {
    StorageError::Unavailable(e.to_string())
}

impl SessionStorage for IdbStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadOnly)
            .map_err(unavailable)?;
        let store = tx.store(KV_STORE).map_err(unavailable)?;

        let value = store
            .get(JsValue::from_str(key))
            .await
            .map_err(unavailable)?;
        let Some(js_val) = value else {
            return Ok(None);
        };
        if js_val.is_undefined() || js_val.is_null() {
            return Ok(None);
        }
        let text: String = serde_wasm_bindgen::from_value(js_val)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        Ok(Some(text))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(unavailable)?;
        let store = tx.store(KV_STORE).map_err(unavailable)?;

        let js_key = JsValue::from_str(key);
        let js_value = JsValue::from_str(value);
        store
            .put(&js_value, Some(&js_key))
            .await
            .map_err(unavailable)?;
        tx.done().await.map_err(unavailable)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let db = self.open_db().await?;
        let tx = db
            .transaction(&[KV_STORE], TransactionMode::ReadWrite)
            .map_err(unavailable)?;
        let store = tx.store(KV_STORE).map_err(unavailable)?;

        store
            .delete(JsValue::from_str(key))
            .await
            .map_err(unavailable)?;
        tx.done().await.map_err(unavailable)?;
        Ok(())
    }
}
