use crate::Route;
use dioxus::prelude::*;

/// Landing page hero with the two calls to action.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "py-20 px-6",
            div { class: "max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
                div { class: "text-center lg:text-left",
                    span { class: "inline-block mb-6 px-3 py-1 rounded-full text-xs font-medium text-white bg-gradient-primary",
                        "★ Advanced Team Collaboration Platform"
                    }
                    h1 { class: "text-5xl md:text-6xl font-bold text-gray-900 mb-6 leading-tight",
                        "Where Teams"
                        span { class: "block text-purple-600", "Sync & Thrive" }
                    }
                    p { class: "text-xl text-gray-600 mb-8 leading-relaxed",
                        "SynergySphere is the intelligent backbone for team collaboration. "
                        "Move beyond reactive project management to proactive team orchestration."
                    }
                    div { class: "flex flex-col sm:flex-row gap-4 justify-center lg:justify-start",
                        Link {
                            to: Route::Login {},
                            class: "bg-purple-600 text-white px-8 py-4 rounded-lg font-semibold text-lg hover:bg-purple-700 transition-colors shadow-elegant",
                            "Start Your Free Trial →"
                        }
                        Link {
                            to: Route::Login {},
                            class: "border-2 border-purple-600 text-purple-600 px-8 py-4 rounded-lg font-semibold text-lg hover:bg-purple-50 transition-colors",
                            "Watch Demo"
                        }
                    }
                }
                div { class: "relative",
                    div { class: "absolute inset-0 bg-gradient-primary opacity-20 blur-3xl rounded-full" }
                    div { class: "relative rounded-2xl shadow-elegant bg-white p-8 grid grid-cols-3 gap-4",
                        for column in ["To Do", "In Progress", "Done"] {
                            div { key: "{column}", class: "space-y-3",
                                h3 { class: "text-sm font-semibold text-gray-700", "{column}" }
                                div { class: "h-12 rounded-lg bg-gray-100" }
                                div { class: "h-12 rounded-lg bg-gray-100" }
                            }
                        }
                    }
                }
            }
        }
    }
}
