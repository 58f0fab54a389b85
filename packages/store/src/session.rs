//! # Session store: who is logged in
//!
//! [`SessionStore`] is the single source of truth for the current user and
//! bearer token. It is a cheap-to-clone handle: clones share one [`Session`]
//! and one storage backend, so the UI can hand it to every page.
//!
//! ## Reducer
//!
//! Every mutation is a [`SessionAction`] applied by [`Session::reduce`]. The
//! reducer returns a [`Persist`] directive telling the store whether durable
//! storage must be rewritten, cleared, or left alone. The convenience methods
//! (`set_user`, `update_user`, ...) are thin wrappers over [`SessionStore::dispatch`].
//!
//! | Action | In-memory effect | Storage |
//! |--------|------------------|---------|
//! | `Login` | user + token set together | write |
//! | `SetUser` | user replaced | write |
//! | `UpdateUser` | patch merged; no-op without a user | write, or nothing |
//! | `SetAccessToken` | token replaced | write |
//! | `Clear` | user + token removed | remove |
//! | `Hydrated` | restored values filled in, `is_hydrated = true` | nothing |
//!
//! ## Hydration
//!
//! [`SessionStore::restore_from_storage`] reads storage only while the session is
//! not yet hydrated. Whatever happens (no value, corrupt value, storage disabled)
//! it ends with `is_hydrated == true`, and that flag never goes back to `false`.
//!
//! ## Ordering
//!
//! Storage round trips run one at a time behind an async lock, and each one
//! stores the session as it is when its turn comes. Durable storage therefore
//! always ends up matching the last mutation, even when backend calls finish
//! out of order.
//!
//! ## Storage failures
//!
//! Failed writes and removes are logged and swallowed. The in-memory state is
//! already updated, so the tab keeps working; only persistence across reloads
//! is lost.

use std::sync::{Arc, Mutex};

use futures::lock::Mutex as AsyncMutex;

use crate::models::{PersistedSession, SessionUser, UserPatch};
use crate::storage::SessionStorage;

/// In-memory session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub access_token: Option<String>,
    /// False until storage has been consulted once.
    pub is_hydrated: bool,
}

/// A mutation of the [`Session`].
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Login { user: SessionUser, token: String },
    SetUser(SessionUser),
    UpdateUser(UserPatch),
    SetAccessToken(String),
    Clear,
    Hydrated(Option<PersistedSession>),
}

/// What durable storage must do after a reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persist {
    Nothing,
    Write,
    Remove,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            access_token: self.access_token.clone(),
        }
    }

    pub fn reduce(&mut self, action: SessionAction) -> Persist {
        match action {
            SessionAction::Login { user, token } => {
                self.user = Some(user);
                self.access_token = Some(token);
                Persist::Write
            }
            SessionAction::SetUser(user) => {
                self.user = Some(user);
                Persist::Write
            }
            SessionAction::UpdateUser(patch) => match self.user.as_mut() {
                Some(user) if !patch.is_empty() => {
                    user.apply(&patch);
                    Persist::Write
                }
                _ => Persist::Nothing,
            },
            SessionAction::SetAccessToken(token) => {
                self.access_token = Some(token);
                Persist::Write
            }
            SessionAction::Clear => {
                self.user = None;
                self.access_token = None;
                Persist::Remove
            }
            SessionAction::Hydrated(restored) => {
                // A mutation that landed before hydration finished wins.
                if !self.is_hydrated && self.user.is_none() && self.access_token.is_none() {
                    if let Some(restored) = restored {
                        self.user = restored.user;
                        self.access_token = restored.access_token;
                    }
                }
                self.is_hydrated = true;
                Persist::Nothing
            }
        }
    }
}

/// Shared handle over the session and its durable storage.
pub struct SessionStore<S> {
    storage: S,
    key: Arc<str>,
    state: Arc<Mutex<Session>>,
    /// Held across every storage round trip so writes land in mutation order.
    persist: Arc<AsyncMutex<()>>,
}

impl<S: Clone> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            key: self.key.clone(),
            state: self.state.clone(),
            persist: self.persist.clone(),
        }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create an empty, not-yet-hydrated store persisting under `key`.
    pub fn new(storage: S, key: impl Into<Arc<str>>) -> Self {
        Self {
            storage,
            key: key.into(),
            state: Arc::new(Mutex::new(Session::default())),
            persist: Arc::new(AsyncMutex::new(())),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        // Nothing panics while holding the lock; recover the data if it ever did.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Apply `action`, persist as the reducer asks, and return the state the
    /// action produced.
    ///
    /// Memory changes immediately. The storage step waits its turn behind any
    /// earlier write and then stores whatever the session holds *now*, so a
    /// slow write can never outlive a later clear.
    pub async fn dispatch(&self, action: SessionAction) -> Session {
        let (persist, snapshot) = {
            let mut state = self.lock();
            let persist = state.reduce(action);
            (persist, state.clone())
        };

        if persist != Persist::Nothing {
            let _turn = self.persist.lock().await;
            self.persist_current().await;
        }
        snapshot
    }

    /// Write the current session, or remove it once nothing is left to keep.
    /// Callers must hold the `persist` lock.
    async fn persist_current(&self) {
        let current = self.lock().persisted();
        if current.is_empty() {
            if let Err(e) = self.storage.remove(&self.key).await {
                tracing::warn!("Failed to remove persisted session: {}", e);
            }
            return;
        }

        match serde_json::to_string(&current) {
            Ok(json) => {
                if let Err(e) = self.storage.write(&self.key, &json).await {
                    tracing::warn!("Failed to persist session: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize session: {}", e),
        }
    }

    /// Set the user and token together (successful login or signup).
    pub async fn login(&self, user: SessionUser, token: String) -> Session {
        self.dispatch(SessionAction::Login { user, token }).await
    }

    pub async fn set_user(&self, user: SessionUser) -> Session {
        self.dispatch(SessionAction::SetUser(user)).await
    }

    /// Merge `patch` into the current user. No-op when logged out.
    pub async fn update_user(&self, patch: UserPatch) -> Session {
        self.dispatch(SessionAction::UpdateUser(patch)).await
    }

    pub async fn set_access_token(&self, token: String) -> Session {
        self.dispatch(SessionAction::SetAccessToken(token)).await
    }

    /// Drop user and token from memory and from durable storage.
    pub async fn clear_user(&self) -> Session {
        self.dispatch(SessionAction::Clear).await
    }

    /// Restore from durable storage once; always leaves the session hydrated.
    ///
    /// Overlapping calls queue on the persistence lock, so storage is read at
    /// most once and no write can slip in between the read and the cleanup of a
    /// corrupt value.
    pub async fn restore_from_storage(&self) -> Session {
        let _turn = self.persist.lock().await;
        if self.lock().is_hydrated {
            return self.snapshot();
        }

        let restored = match self.storage.read(&self.key).await {
            Ok(Some(json)) => match serde_json::from_str::<PersistedSession>(&json) {
                Ok(session) if !session.is_empty() => Some(session),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("Discarding corrupt persisted session: {}", e);
                    if let Err(e) = self.storage.remove(&self.key).await {
                        tracing::warn!("Failed to remove corrupt session: {}", e);
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Session storage unavailable, continuing logged out: {}", e);
                None
            }
        };

        let snapshot = {
            let mut state = self.lock();
            state.reduce(SessionAction::Hydrated(restored));
            state.clone()
        };
        tracing::debug!(authenticated = snapshot.is_authenticated(), "session hydrated");
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;

    const KEY: &str = "codeflix-session";

    fn user(id: u64) -> SessionUser {
        SessionUser::new(id, format!("user-{id}"))
    }

    /// Memory storage whose first read and first write park for a couple of
    /// scheduler turns, so other tasks can run in between.
    #[derive(Clone, Default)]
    struct Sluggish {
        inner: MemoryStorage,
        read_parked: Arc<std::sync::atomic::AtomicBool>,
        write_parked: Arc<std::sync::atomic::AtomicBool>,
    }

    async fn park_once(flag: &std::sync::atomic::AtomicBool) {
        if !flag.swap(true, std::sync::atomic::Ordering::SeqCst) {
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
        }
    }

    impl SessionStorage for Sluggish {
        async fn read(&self, key: &str) -> Result<Option<String>, crate::StorageError> {
            park_once(&self.read_parked).await;
            self.inner.read(key).await
        }

        async fn write(&self, key: &str, value: &str) -> Result<(), crate::StorageError> {
            park_once(&self.write_parked).await;
            self.inner.write(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), crate::StorageError> {
            self.inner.remove(key).await
        }
    }

    #[tokio::test]
    async fn test_set_then_clear_ends_logged_out() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), KEY);

        store.set_user(user(1)).await;
        store.set_access_token("abc".to_string()).await;
        assert!(storage.peek(KEY).is_some());

        let session = store.clear_user().await;
        assert!(session.user.is_none());
        assert!(session.access_token.is_none());
        assert!(storage.peek(KEY).is_none());
    }

    #[tokio::test]
    async fn test_slow_write_cannot_resurrect_cleared_session() {
        let storage = Sluggish::default();
        let store = SessionStore::new(storage.clone(), KEY);

        tokio::join!(store.login(user(1), "tok".to_string()), async {
            tokio::task::yield_now().await;
            store.clear_user().await;
        });

        assert!(!store.snapshot().is_authenticated());
        assert!(storage.inner.peek(KEY).is_none());

        let reloaded = SessionStore::new(storage.inner.clone(), KEY)
            .restore_from_storage()
            .await;
        assert!(reloaded.user.is_none());
    }

    #[tokio::test]
    async fn test_overlapping_restores_read_once() {
        let storage = Sluggish::default();
        storage.inner.seed(KEY, r#"{"user":{"id":4,"name":"user-4"},"accessToken":"t"}"#);
        let store = SessionStore::new(storage.clone(), KEY);

        let (a, b) = tokio::join!(store.restore_from_storage(), store.restore_from_storage());

        assert_eq!(a, b);
        assert_eq!(a.user_id(), Some(4));
        assert_eq!(storage.inner.read_count(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_cleanup_keeps_concurrent_login() {
        let storage = Sluggish::default();
        storage.inner.seed(KEY, "{not json");
        let store = SessionStore::new(storage.clone(), KEY);

        let (restored, _) = tokio::join!(store.restore_from_storage(), async {
            tokio::task::yield_now().await;
            store.login(user(7), "fresh".to_string()).await;
        });

        assert_eq!(restored.user_id(), Some(7));
        let durable = storage.inner.peek(KEY).expect("login persisted");
        let persisted: PersistedSession = serde_json::from_str(&durable).unwrap();
        assert_eq!(persisted.user.map(|u| u.id), Some(7));
        assert_eq!(persisted.access_token.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_restore_is_idempotent() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone(), KEY)
            .login(user(2), "tok".to_string())
            .await;

        let store = SessionStore::new(storage.clone(), KEY);
        let first = store.restore_from_storage().await;
        let writes = storage.write_count();
        let second = store.restore_from_storage().await;

        assert_eq!(first, second);
        assert!(second.is_hydrated);
        assert_eq!(second.user_id(), Some(2));
        assert_eq!(storage.read_count(), 1);
        assert_eq!(storage.write_count(), writes);
    }

    #[tokio::test]
    async fn test_restore_with_disabled_storage_still_hydrates() {
        let store = SessionStore::new(MemoryStorage::unavailable(), KEY);

        let session = store.restore_from_storage().await;
        assert!(session.is_hydrated);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_discards_corrupt_payload() {
        let storage = MemoryStorage::new();
        storage.seed(KEY, "{not json");

        let session = SessionStore::new(storage.clone(), KEY)
            .restore_from_storage()
            .await;
        assert!(session.is_hydrated);
        assert!(session.user.is_none());
        assert!(storage.peek(KEY).is_none());
    }

    #[tokio::test]
    async fn test_update_user_without_user_is_noop() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), KEY);

        let session = store
            .update_user(UserPatch {
                bio: Some("hello".to_string()),
                ..Default::default()
            })
            .await;
        assert!(session.user.is_none());
        assert_eq!(storage.write_count(), 0);
    }

    #[tokio::test]
    async fn test_update_user_merges_and_persists() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone(), KEY);
        store.login(user(5), "t".to_string()).await;

        store
            .update_user(UserPatch {
                phone: Some("010-0000-0000".to_string()),
                ..Default::default()
            })
            .await;

        let reloaded = SessionStore::new(storage, KEY).restore_from_storage().await;
        let u = reloaded.user.unwrap();
        assert_eq!(u.name, "user-5");
        assert_eq!(u.phone.as_deref(), Some("010-0000-0000"));
    }

    #[tokio::test]
    async fn test_failed_write_still_updates_memory() {
        let storage = MemoryStorage::unavailable();
        let store = SessionStore::new(storage, KEY);

        let session = store.login(user(9), "tok".to_string()).await;
        assert_eq!(session.user_id(), Some(9));
        assert_eq!(store.snapshot().access_token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = SessionStore::new(MemoryStorage::new(), KEY);
        let other = store.clone();

        store.set_user(user(3)).await;
        assert_eq!(other.snapshot().user_id(), Some(3));
    }

    #[test]
    fn test_hydration_does_not_override_earlier_login() {
        let mut session = Session::default();
        session.reduce(SessionAction::Login {
            user: user(1),
            token: "fresh".to_string(),
        });
        session.reduce(SessionAction::Hydrated(Some(PersistedSession {
            user: Some(user(2)),
            access_token: Some("stale".to_string()),
        })));

        assert!(session.is_hydrated);
        assert_eq!(session.user_id(), Some(1));
        assert_eq!(session.access_token.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_clear_keeps_hydrated_flag() {
        let mut session = Session::default();
        session.reduce(SessionAction::Hydrated(None));
        assert_eq!(session.reduce(SessionAction::Clear), Persist::Remove);
        assert!(session.is_hydrated);
    }
}
