//! Email/password login form.

use dioxus::prelude::*;

use crate::alert;
use crate::session::use_session;

/// Login form. On success the session is stored, a welcome alert is shown
/// and `on_navigate` is called with `/`.
#[component]
pub fn LoginView(on_navigate: EventHandler<String>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    use_effect(move || {
        if session.state.read().is_authenticated() {
            on_navigate.call(api::HOME_PATH.to_string());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let result =
                api::session::login(&session.client(), &session.store(), &email(), &password())
                    .await;
            loading.set(false);

            match result {
                Ok(nav) => {
                    session.sync();
                    if let Some(notice) = nav.notice {
                        alert(&notice);
                    }
                    on_navigate.call(nav.to);
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    let message = e.user_message();
                    alert(&message);
                    error.set(Some(message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Log in to CODEFLIX" }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }

                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "auth-submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }
        }
    }
}
