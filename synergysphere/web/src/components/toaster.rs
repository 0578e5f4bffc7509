use crate::state::use_toasts;
use dioxus::prelude::*;
use synergysphere_core::Severity;

fn toast_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Destructive => "bg-red-600 text-white",
        Severity::Default => "bg-white border border-gray-200 text-gray-900",
    }
}

/// Renders the toast queue in the bottom-right corner.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let queue = toasts.queue();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 space-y-2 w-80",
            for toast in queue.read().toasts().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast-enter rounded-lg shadow-lg p-4 {toast_class(toast.notice.severity)}",
                    onclick: move |_| toasts.dismiss(toast.id),
                    p { class: "font-semibold text-sm", "{toast.notice.title}" }
                    if !toast.notice.description.is_empty() {
                        p { class: "text-sm opacity-90", "{toast.notice.description}" }
                    }
                }
            }
        }
    }
}
