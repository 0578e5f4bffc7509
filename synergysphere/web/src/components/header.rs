use crate::components::Avatar;
use crate::config::AppConfig;
use crate::state::{sign_out, use_auth, use_current_user, use_toasts};
use crate::Route;
use dioxus::prelude::*;

/// Logo mark and product name.
#[component]
pub fn Brand() -> Element {
    let config = use_context::<AppConfig>();
    rsx! {
        Link { to: Route::Home {}, class: "flex items-center gap-2",
            span { class: "w-8 h-8 bg-gradient-primary rounded-lg flex items-center justify-center text-white font-bold",
                "⚡"
            }
            span { class: "text-xl font-bold text-purple-700", "{config.app.brand}" }
        }
    }
}

/// Sticky header for signed-in pages: brand, settings, the current user and logout.
#[component]
pub fn Header() -> Element {
    let auth = use_auth();
    let user = use_current_user();
    let toasts = use_toasts();
    let nav = navigator();
    let signed_in = auth.read().is_signed_in();

    rsx! {
        header { class: "border-b bg-white/80 backdrop-blur-sm sticky top-0 z-40",
            div { class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between",
                Brand {}
                div { class: "flex items-center gap-4",
                    Link { to: Route::SettingsView {}, class: "text-sm text-gray-600 hover:text-gray-900", "Settings" }
                    if let Some(user) = user {
                        Link { to: Route::ProfileView {}, class: "flex items-center gap-2",
                            Avatar { name: user.name.clone(), src: user.avatar.clone().unwrap_or_default() }
                            span { class: "text-sm font-medium", "{user.name}" }
                        }
                    } else {
                        Link { to: Route::Login {}, class: "text-sm font-medium text-purple-600", "Sign In" }
                    }
                    if signed_in {
                        button {
                            class: "text-sm text-gray-600 hover:text-red-600",
                            title: "Log out",
                            onclick: move |_| sign_out(auth, toasts, nav),
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}

/// "Back to ..." navigation link shown at the top of detail pages.
#[component]
pub fn BackLink(to: Route, label: String) -> Element {
    rsx! {
        Link { to, class: "inline-flex items-center text-sm text-gray-600 hover:text-gray-900",
            "← {label}"
        }
    }
}
