use dioxus::prelude::*;

use crate::session::use_session;

/// Chat content hosted by the drawer.
///
/// The draft lives in component state, so closing the drawer discards it.
#[component]
pub fn ChatPanel() -> Element {
    let session = use_session();
    let mut draft = use_signal(String::new);

    let name = session
        .state
        .read()
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "chat-panel",
            p {
                class: "chat-panel-empty",
                "Hi {name}, ask our support team anything."
            }
            div {
                class: "chat-panel-input",
                input {
                    r#type: "text",
                    placeholder: "Type a message",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
            }
        }
    }
}
