use dioxus::prelude::*;
use ui::views::SettingsView;

use crate::use_app_navigate;

#[component]
pub fn Settings() -> Element {
    let on_navigate = use_app_navigate();

    rsx! {
        SettingsView { on_navigate: on_navigate }
    }
}
