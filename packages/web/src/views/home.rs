use dioxus::prelude::*;
use ui::use_session;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let greeting = match session.state.read().user.as_ref() {
        Some(user) => format!("Welcome back, {}!", user.name),
        None => "Learn to code with CODEFLIX.".to_string(),
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{greeting}" }
            p { "Browse courses, keep learning, and chat with instructors." }
        }
    }
}
