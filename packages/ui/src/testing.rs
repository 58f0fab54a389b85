//! Helpers for driving components in a headless [`VirtualDom`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use store::{CodeflixConfig, MemoryStorage, SessionStore, SessionUser};

use crate::session::SessionContext;
use crate::PlatformStorage;

/// Lets a test reach the [`SessionContext`] created inside the tree.
pub type ContextSlot = Rc<Cell<Option<SessionContext>>>;

pub fn user(id: u64) -> SessionUser {
    SessionUser::new(id, format!("user-{id}"))
}

pub fn memory_store(storage: &MemoryStorage) -> SessionStore<PlatformStorage> {
    SessionStore::new(PlatformStorage::from(storage.clone()), "codeflix-session")
}

/// Store that has already been hydrated, optionally with someone logged in.
pub async fn hydrated_store(logged_in: Option<u64>) -> SessionStore<PlatformStorage> {
    let store = memory_store(&MemoryStorage::new());
    store.restore_from_storage().await;
    if let Some(id) = logged_in {
        store.login(user(id), format!("token-{id}")).await;
    }
    store
}

/// Build `app` with the store, config and a context slot as root contexts and
/// render the first frame.
pub fn mount(
    app: fn() -> Element,
    store: SessionStore<PlatformStorage>,
    config: CodeflixConfig,
) -> (VirtualDom, ContextSlot) {
    let slot = ContextSlot::default();
    let mut dom = VirtualDom::new(app)
        .with_root_context(store)
        .with_root_context(config)
        .with_root_context(slot.clone());
    dom.rebuild_in_place();
    (dom, slot)
}

/// Run effects, tasks and re-renders until the tree goes quiet.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..20 {
        let work = tokio::time::timeout(Duration::from_millis(300), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

/// Publish the store's state into the tree, as a page does after an `api::session` flow.
pub fn sync(dom: &VirtualDom, slot: &ContextSlot) {
    let session = slot.get().expect("session context captured");
    dom.in_runtime(|| session.sync());
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

/// Records the surrounding [`SessionContext`] into the root [`ContextSlot`].
pub fn capture_session() {
    let session = crate::use_session();
    let slot = use_context::<ContextSlot>();
    use_hook(move || slot.set(Some(session)));
}
