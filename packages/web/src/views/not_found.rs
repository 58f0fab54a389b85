use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Page not found" }
            p { "/{path} does not exist." }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
