//! Login page.

use dioxus::prelude::*;
use ui::views::LoginView;

use crate::use_app_navigate;

#[component]
pub fn Login() -> Element {
    let on_navigate = use_app_navigate();

    rsx! {
        LoginView { on_navigate: on_navigate }
    }
}
