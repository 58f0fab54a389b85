//! # Chat drawer
//!
//! A slide-over panel that shows the chat without leaving the current page.
//!
//! [`DrawerMachine`] is the whole behaviour; the component only feeds it
//! events and applies the [`DrawerEffect`]s it returns.
//!
//! | State | Event | Effects |
//! |-------|-------|---------|
//! | any, not mounted | `Open` / `Close` | none (state recorded only) |
//! | not mounted | `Mounted` | if open: `LockScroll`, `MountChat` |
//! | `Closed` | `Open` | `LockScroll`, `MountChat` |
//! | `Open` | `Close` / `OverlayClick` | `UnlockScroll`, `UnmountChat` |
//! | `Open` | `Teardown` | `UnlockScroll`, `UnmountChat` |
//!
//! `mounted` flips only after the first client render, so the drawer never
//! renders or touches the page scroll during a server/non-interactive pass.
//! Unmounting the chat drops its draft input.

use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::scroll_lock::{DocumentScrollLock, ScrollLock};
use crate::session::use_session;
use crate::views::ChatPanel;
use crate::Icon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// First client-side render finished.
    Mounted,
    Open,
    Close,
    OverlayClick,
    /// The drawer component is going away.
    Teardown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerEffect {
    LockScroll,
    UnlockScroll,
    MountChat,
    UnmountChat,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawerMachine {
    state: DrawerState,
    mounted: bool,
}

impl DrawerMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the chat content is on screen (and the page scroll locked).
    pub fn is_active(&self) -> bool {
        self.mounted && self.is_open()
    }

    pub fn handle(&mut self, event: DrawerEvent) -> Vec<DrawerEffect> {
        let was_active = self.is_active();
        match event {
            DrawerEvent::Mounted => self.mounted = true,
            DrawerEvent::Open => self.state = DrawerState::Open,
            DrawerEvent::Close | DrawerEvent::OverlayClick => self.state = DrawerState::Closed,
            DrawerEvent::Teardown => {
                self.mounted = false;
                self.state = DrawerState::Closed;
            }
        }
        match (was_active, self.is_active()) {
            (false, true) => vec![DrawerEffect::LockScroll, DrawerEffect::MountChat],
            (true, false) => vec![DrawerEffect::UnlockScroll, DrawerEffect::UnmountChat],
            _ => Vec::new(),
        }
    }
}

/// Run the scroll side of `effects`; mounting is handled by rendering.
pub fn apply_effects(effects: &[DrawerEffect], lock: &impl ScrollLock) {
    for effect in effects {
        match effect {
            DrawerEffect::LockScroll => lock.lock(),
            DrawerEffect::UnlockScroll => lock.unlock(),
            DrawerEffect::MountChat | DrawerEffect::UnmountChat => {}
        }
    }
}

/// Get the drawer signal provided by [`crate::AppShell`].
pub fn use_chat_drawer() -> Signal<DrawerMachine> {
    use_context::<Signal<DrawerMachine>>()
}

/// Feed `event` to the drawer and apply its effects to the document.
pub fn send_drawer_event(mut drawer: Signal<DrawerMachine>, event: DrawerEvent) {
    let effects = match drawer.try_write() {
        Ok(mut machine) => machine.handle(event),
        Err(_) => return,
    };
    apply_effects(&effects, &DocumentScrollLock);
}

/// Overlay + side panel hosting the chat. Only rendered for logged-in users.
#[component]
pub fn ChatDrawer() -> Element {
    let drawer = use_chat_drawer();
    let session = use_session();

    use_effect(move || send_drawer_event(drawer, DrawerEvent::Mounted));
    use_drop(move || send_drawer_event(drawer, DrawerEvent::Teardown));

    // Logging out closes the drawer.
    use_effect(move || {
        if session.state.read().user.is_none() {
            send_drawer_event(drawer, DrawerEvent::Close);
        }
    });

    if !drawer.read().is_active() || session.state.read().user.is_none() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "chat-drawer-overlay",
            onclick: move |_| send_drawer_event(drawer, DrawerEvent::OverlayClick),
            aside {
                class: "chat-drawer",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "chat-drawer-header",
                    span { "Chat" }
                    button {
                        class: "chat-drawer-close",
                        title: "Close",
                        onclick: move |_| send_drawer_event(drawer, DrawerEvent::Close),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                ChatPanel {}
            }
        }
    }
}
