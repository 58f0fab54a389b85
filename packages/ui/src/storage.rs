//! Platform-appropriate session storage.
//!
//! - **Web** (WASM + `web` feature): IndexedDB via [`store::IdbStorage`]
//! - **Desktop / native**: files under `<data_dir>/codeflix/` via [`store::FileStorage`]
//! - **WASM without `web`**, or injected by a host: in-memory only, nothing
//!   survives a reload

use store::{CodeflixConfig, MemoryStorage, SessionStorage, SessionStore, StorageError};

/// Storage backend behind the app's [`SessionStore`].
#[derive(Clone)]
pub enum PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    Idb(store::IdbStorage),
    #[cfg(not(target_arch = "wasm32"))]
    File(store::FileStorage),
    Memory(MemoryStorage),
}

impl PlatformStorage {
    fn detect() -> Self {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Self::Idb(store::IdbStorage::new())
        }
        #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
        {
            Self::Memory(MemoryStorage::new())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let base = dirs::data_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join("codeflix");
            Self::File(store::FileStorage::new(base))
        }
    }
}

impl From<MemoryStorage> for PlatformStorage {
    fn from(storage: MemoryStorage) -> Self {
        Self::Memory(storage)
    }
}

impl SessionStorage for PlatformStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            #[cfg(all(target_arch = "wasm32", feature = "web"))]
            Self::Idb(s) => s.read(key).await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(s) => s.read(key).await,
            Self::Memory(s) => s.read(key).await,
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            #[cfg(all(target_arch = "wasm32", feature = "web"))]
            Self::Idb(s) => s.write(key, value).await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(s) => s.write(key, value).await,
            Self::Memory(s) => s.write(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            #[cfg(all(target_arch = "wasm32", feature = "web"))]
            Self::Idb(s) => s.remove(key).await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(s) => s.remove(key).await,
            Self::Memory(s) => s.remove(key).await,
        }
    }
}

/// Create an empty (not yet hydrated) session store for this platform.
pub fn make_session_store(config: &CodeflixConfig) -> SessionStore<PlatformStorage> {
    SessionStore::new(PlatformStorage::detect(), config.session.storage_key.as_str())
}
