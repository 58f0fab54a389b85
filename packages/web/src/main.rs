use dioxus::prelude::*;

use ui::{AppShell, SessionProvider};
use views::{Home, Login, NotFound, Settings};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/auth/user/login")]
        Login {},
        #[route("/dashboard/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Resolve an app path coming from a shared view into a route.
pub(crate) fn route_for(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|_| {
        tracing::warn!("unknown route {}, going home", path);
        Route::Home {}
    })
}

/// Navigation callback handed to the shared `ui` views.
pub(crate) fn use_app_navigate() -> EventHandler<String> {
    let nav = use_navigator();
    use_callback(move |path: String| {
        nav.push(route_for(&path));
    })
}

/// Header, page outlet and chat drawer around every routed page.
#[component]
fn Shell() -> Element {
    let on_navigate = use_app_navigate();

    rsx! {
        AppShell {
            on_navigate: on_navigate,
            Outlet::<Route> {}
        }
    }
}
