use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "p-8 max-w-2xl mx-auto",
            h2 { class: "text-2xl font-semibold text-gray-800",
                "About Page"
            }
            p { class: "mt-2 text-gray-700",
                "A small landing site built with Dioxus and Tailwind CSS."
            }
            Link {
                to: Route::Home {},
                class: "mt-4 inline-block text-blue-500",
                "Back Home"
            }
        }
    }
}
