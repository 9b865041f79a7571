use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "mt-[-200px] flex min-h-screen flex-col items-center justify-center",
            div { class: "text-4xl font-bold", "Home Page" }

            div { class: "mt-10",
                Link {
                    to: Route::About {},
                    class: "text-blue-500",
                    "Go to About Page"
                }
            }
        }
    }
}
