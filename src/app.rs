use crate::monitoring::Logger;
use crate::pages::{About, Home, PageNotFound};
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/styling/output.css") }

        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive!(|route| {
        Logger::debug(&format!("route changed: {route}"));
    }));

    rsx! {
        div { class: "min-h-screen bg-white text-gray-900",
            main {
                Outlet::<Route> {}
            }
        }
    }
}
