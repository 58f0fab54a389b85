//! Unread chat message badge for the header.

use api::chat::{refresh_unread, UnreadTarget};
use api::ApiClient;
use dioxus::prelude::*;
use store::UnreadCounter;

use crate::session::use_session;

/// Header-scoped unread counter.
///
/// Refreshes whenever the logged-in user changes identity (including the
/// first mount) and, when `chat.unread_poll_interval_secs` is non-zero, on that
/// interval. A failed fetch keeps the previous count; logging out resets it.
pub fn use_unread_count() -> Signal<UnreadCounter> {
    let session = use_session();
    let mut counter = use_signal(UnreadCounter::new);
    let user_id = use_memo(move || session.state.read().user_id());

    use_effect(move || match user_id() {
        Some(id) => {
            spawn(refresh(session.client(), counter, id));
        }
        None => counter.write().reset(),
    });

    let interval = session.config().chat.unread_poll_interval_secs;
    use_future(move || async move {
        if interval == 0 {
            return;
        }
        loop {
            sleep_secs(interval).await;
            if let Some(id) = *user_id.peek() {
                refresh(session.client(), counter, id).await;
            }
        }
    });

    counter
}

/// Signal-backed [`UnreadTarget`]: each step takes its own short write.
struct SignalTarget(Signal<UnreadCounter>);

impl UnreadTarget for SignalTarget {
    fn update<R>(&mut self, f: impl FnOnce(&mut UnreadCounter) -> R) -> R {
        f(&mut self.0.write())
    }
}

async fn refresh(client: ApiClient, counter: Signal<UnreadCounter>, user_id: u64) {
    refresh_unread(&client, SignalTarget(counter), user_id).await;
}

async fn sleep_secs(secs: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_secs(u64::from(secs))).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_secs(u64::from(secs))).await;
}

/// Text shown in the badge, or `None` when there is nothing unread.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Small count bubble; renders nothing at zero.
#[component]
pub fn UnreadBadge(count: u32) -> Element {
    let Some(label) = badge_label(count) else {
        return rsx! {};
    };

    rsx! {
        span {
            class: "unread-badge",
            title: "Unread messages",
            "{label}"
        }
    }
}
