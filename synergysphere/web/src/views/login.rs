use crate::components::Brand;
use crate::state::use_auth;
use crate::Route;
use dioxus::prelude::*;
use synergysphere_core::CurrentUser;

/// Stand-in sign-in page: signs the demo identity into the shared auth context.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = navigator();
    let demo = CurrentUser::demo();

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        auth.write().login(CurrentUser::demo());
        nav.push(Route::Dashboard {});
    };

    rsx! {
        main { class: "min-h-screen bg-gradient-surface flex items-center justify-center px-4",
            div { class: "bg-white rounded-lg shadow-xl p-8 w-full max-w-md space-y-6",
                div { class: "flex justify-center", Brand {} }
                h1 { class: "text-2xl font-bold text-gray-900 text-center", "Welcome back" }
                p { class: "text-gray-600 text-center",
                    "Continue as the demo user to explore the workspace."
                }
                form { onsubmit: handle_sign_in,
                    div { class: "mb-4 rounded-lg border border-gray-200 p-4",
                        p { class: "font-medium", "{demo.name}" }
                        p { class: "text-sm text-gray-500", "{demo.email}" }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                        "Sign In"
                    }
                }
            }
        }
    }
}
