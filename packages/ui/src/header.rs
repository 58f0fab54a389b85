use dioxus::prelude::*;

use crate::chat_drawer::{send_drawer_event, use_chat_drawer, ChatDrawer, DrawerEvent, DrawerMachine};
use crate::icons::FaComments;
use crate::session::{use_session, LogoutButton};
use crate::unread_badge::{use_unread_count, UnreadBadge};
use crate::Icon;

/// Global header: brand, chat button with unread badge, and the account area.
#[component]
pub fn Header(on_navigate: EventHandler<String>) -> Element {
    let session = use_session();
    let drawer = use_chat_drawer();
    let unread = use_unread_count();

    let user = session.state.read().user.clone();

    rsx! {
        header {
            class: "site-header",
            button {
                class: "site-header-brand",
                onclick: move |_| on_navigate.call(api::HOME_PATH.to_string()),
                "CODEFLIX"
            }
            div {
                class: "site-header-actions",
                if let Some(user) = user {
                    button {
                        class: "site-header-chat",
                        title: "Chat",
                        onclick: move |_| send_drawer_event(drawer, DrawerEvent::Open),
                        Icon { icon: FaComments, width: 16, height: 16 }
                        UnreadBadge { count: unread.read().count() }
                    }
                    if let Some(ref image) = user.profile_image {
                        img {
                            class: "site-header-avatar",
                            src: "{image}",
                            alt: "Profile",
                        }
                    }
                    span { class: "site-header-name", "{user.name}" }
                    button {
                        class: "site-header-link",
                        onclick: move |_| on_navigate.call(api::SETTINGS_PATH.to_string()),
                        "Settings"
                    }
                    LogoutButton { on_navigate: on_navigate, class: "site-header-link" }
                } else {
                    button {
                        class: "site-header-link",
                        onclick: move |_| on_navigate.call(api::LOGIN_PATH.to_string()),
                        "Login"
                    }
                }
            }
        }
    }
}

/// Page chrome shared by every route: header, page content, chat drawer.
#[component]
pub fn AppShell(on_navigate: EventHandler<String>, children: Element) -> Element {
    use_context_provider(|| Signal::new(DrawerMachine::new()));

    rsx! {
        Header { on_navigate: on_navigate }
        main {
            class: "site-main",
            {children}
        }
        ChatDrawer {}
    }
}
