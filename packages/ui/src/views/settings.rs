use dioxus::prelude::*;

use api::SettingsGate;
use store::{SessionAction, UserPatch};

use crate::alert;
use crate::session::use_session;

/// Patch for the profile form. A blank name is ignored; the other fields are
/// always sent, so blanking one clears it.
fn profile_patch(name: &str, phone: &str, github_link: &str, bio: &str) -> UserPatch {
    UserPatch {
        name: Some(name.trim().to_string()).filter(|n| !n.is_empty()),
        phone: Some(phone.trim().to_string()),
        github_link: Some(github_link.trim().to_string()),
        bio: Some(bio.trim().to_string()),
        ..Default::default()
    }
}

/// Dashboard settings: profile fields of the logged-in user.
///
/// Without a stored session the page asks the backend who is logged in; if
/// nobody is, it redirects to the login page.
#[component]
pub fn SettingsView(on_navigate: EventHandler<String>) -> Element {
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut github_link = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut ready = use_signal(|| false);

    let _gate = use_resource(move || async move {
        match api::session::gate_settings(&session.client(), &session.store()).await {
            SettingsGate::Ready(user) => {
                session.sync();
                name.set(user.name);
                phone.set(user.phone.unwrap_or_default());
                github_link.set(user.github_link.unwrap_or_default());
                bio.set(user.bio.unwrap_or_default());
                ready.set(true);
            }
            SettingsGate::Redirect(nav) => {
                session.sync();
                if let Some(notice) = nav.notice {
                    alert(&notice);
                }
                on_navigate.call(nav.to);
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let patch = profile_patch(&name(), &phone(), &github_link(), &bio());
            let updated = session.dispatch(SessionAction::UpdateUser(patch)).await;
            if updated.user.is_some() {
                alert("Your profile has been updated.");
            }
        });
    };

    if !ready() {
        return rsx! {
            div { class: "view-page", "Loading..." }
        };
    }

    rsx! {
        div {
            class: "view-page",

            h1 { class: "view-title", "Settings" }

            form {
                class: "settings-form",
                onsubmit: handle_save,

                label { r#for: "settings-name", "Name" }
                input {
                    id: "settings-name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }

                label { r#for: "settings-phone", "Phone" }
                input {
                    id: "settings-phone",
                    r#type: "tel",
                    value: "{phone}",
                    oninput: move |evt| phone.set(evt.value()),
                }

                label { r#for: "settings-github", "GitHub" }
                input {
                    id: "settings-github",
                    r#type: "url",
                    value: "{github_link}",
                    oninput: move |evt| github_link.set(evt.value()),
                }

                label { r#for: "settings-bio", "Bio" }
                textarea {
                    id: "settings-bio",
                    rows: "4",
                    value: "{bio}",
                    oninput: move |evt| bio.set(evt.value()),
                }

                button { r#type: "submit", class: "settings-save", "Save" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::SessionUser;

    #[test]
    fn test_blank_fields_clear_profile_values() {
        let mut user = SessionUser::new(1, "kim");
        user.phone = Some("010-1111-2222".to_string());
        user.github_link = Some("https://github.com/kim".to_string());
        user.bio = Some("hello".to_string());

        user.apply(&profile_patch("  ", "", " ", "new bio"));

        assert_eq!(user.name, "kim");
        assert!(user.phone.is_none());
        assert!(user.github_link.is_none());
        assert_eq!(user.bio.as_deref(), Some("new bio"));
    }
}
