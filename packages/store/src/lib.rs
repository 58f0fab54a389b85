pub mod config;
pub mod models;
pub mod query;
pub mod sequence;
pub mod session;
pub mod storage;
pub mod unread;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod idb;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use idb::IdbStorage;

pub use config::CodeflixConfig;
pub use models::{PersistedSession, SessionUser, UserPatch};
pub use query::{Page, PageQuery, PagedCollection, Sort, SortDirection};
pub use sequence::{RequestSequencer, RequestTicket};
pub use session::{Session, SessionAction, SessionStore};
pub use storage::{SessionStorage, StorageError};
pub use unread::{parse_unread_count, UnreadCounter, UnreadShapeError};
