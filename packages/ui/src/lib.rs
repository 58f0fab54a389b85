//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::load_config;

mod storage;
pub use storage::{make_session_store, PlatformStorage};

mod alert;
pub use alert::alert;

mod session;
pub use session::{use_session, LogoutButton, SessionContext, SessionProvider};

pub mod scroll_lock;
pub use scroll_lock::{DocumentScrollLock, ScrollLock};

pub mod chat_drawer;
pub use chat_drawer::{use_chat_drawer, ChatDrawer, DrawerEvent, DrawerMachine};

mod unread_badge;
pub use unread_badge::{use_unread_count, UnreadBadge};

mod header;
pub use header::{AppShell, Header};

pub mod views;

#[cfg(test)]
mod testing;
