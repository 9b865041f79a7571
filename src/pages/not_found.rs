use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(#[props(default = vec![])] segments: Vec<String>) -> Element {
    rsx! {
        div { class: "p-8 text-center",
            h1 { class: "text-3xl font-bold text-red-600",
                "404 – Page Not Found"
            }
            p { class: "mt-2 text-gray-600",
                "Sorry, the page you're looking for doesn't exist."
            }
            p { class: "mt-2 text-sm text-gray-500",
                "Attempted path: /{segments.join(\"/\")}"
            }
            Link {
                to: Route::Home {},
                class: "mt-4 inline-block text-blue-500",
                "Return Home"
            }
        }
    }
}
