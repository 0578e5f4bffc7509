use crate::components::{BackLink, Brand};
use crate::Route;
use dioxus::prelude::*;

/// Catch-all page for paths the router does not know.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        main { class: "min-h-screen bg-gradient-surface flex items-center justify-center px-4",
            div { class: "bg-white rounded-lg shadow-xl p-8 w-full max-w-md space-y-6 text-center",
                div { class: "flex justify-center", Brand {} }
                h1 { class: "text-2xl font-bold text-gray-900", "Page not found" }
                p { class: "text-gray-600", "There is nothing at /{path} in your workspace." }
                div { class: "flex justify-center gap-6",
                    BackLink { to: Route::Dashboard {}, label: "Back to Dashboard" }
                    BackLink { to: Route::Home {}, label: "Home" }
                }
            }
        }
    }
}
