//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{CodeflixConfig, Session, SessionAction, SessionStore};

use crate::config::load_config;
use crate::storage::{make_session_store, PlatformStorage};

/// Everything a page needs to read or change the current session.
///
/// `state` mirrors the store so components re-render on change; the store
/// itself owns persistence. Always mutate through [`SessionContext::dispatch`]
/// (or call [`SessionContext::sync`] after an `api::session` flow) so the two
/// never drift.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: Signal<Session>,
    store: CopyValue<SessionStore<PlatformStorage>>,
    client: CopyValue<ApiClient>,
    config: CopyValue<CodeflixConfig>,
}

impl SessionContext {
    pub fn store(&self) -> SessionStore<PlatformStorage> {
        (*self.store.read()).clone()
    }

    pub fn config(&self) -> CodeflixConfig {
        (*self.config.read()).clone()
    }

    /// A client carrying the current bearer token. Does not subscribe to changes.
    pub fn client(&self) -> ApiClient {
        self.client.read().for_session(&self.state.peek())
    }

    /// Apply an action to the store and publish the result.
    pub async fn dispatch(&self, action: SessionAction) -> Session {
        let session = self.store().dispatch(action).await;
        let mut state = self.state;
        state.set(session.clone());
        session
    }

    /// Publish the store's current state (after an `api::session` flow mutated it).
    pub fn sync(&self) {
        let mut state = self.state;
        state.set(self.store().snapshot());
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that owns the session store.
///
/// Restores the session from durable storage on the first client-side mount
/// and renders `children` only once that attempt has finished, so pages never
/// flash their logged-out state.
///
/// A `SessionStore<PlatformStorage>` or [`CodeflixConfig`] already in context
/// (for example a root context set by the host) is used instead of the bundled
/// config and the platform's storage.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let context = use_context_provider(|| {
        let config = try_consume_context::<CodeflixConfig>().unwrap_or_else(load_config);
        let store = try_consume_context::<SessionStore<PlatformStorage>>()
            .unwrap_or_else(|| make_session_store(&config));
        SessionContext {
            state: Signal::new(store.snapshot()),
            store: CopyValue::new(store),
            client: CopyValue::new(ApiClient::from_config(&config)),
            config: CopyValue::new(config),
        }
    });
    let mut state = context.state;

    // Effects never run during server rendering, only after the client mounts.
    use_effect(move || {
        let store = context.store();
        spawn(async move {
            let restored = store.restore_from_storage().await;
            state.set(restored);
        });
    });

    if !state.read().is_hydrated {
        return rsx! {
            div { class: "session-loading", "Loading..." }
        };
    }

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_navigate: EventHandler<String>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| async move {
        let nav = api::session::logout(&session.client(), &session.store()).await;
        session.sync();
        if let Some(notice) = nav.notice {
            crate::alert(&notice);
        }
        on_navigate.call(nav.to);
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
