use dioxus::prelude::*;

/// Round avatar showing the picture at `src`, or the name's initial when `src` is empty.
#[component]
pub fn Avatar(
    name: String,
    #[props(default)] src: String,
    #[props(default = "w-8 h-8".to_string())] size: String,
) -> Element {
    let initial = name.chars().next().map(String::from).unwrap_or_default();
    let content = if src.is_empty() {
        rsx! { "{initial}" }
    } else {
        rsx! { img { class: "w-full h-full object-cover", src: "{src}", alt: "{name}" } }
    };

    rsx! {
        span { class: "{size} inline-flex items-center justify-center rounded-full bg-gray-200 text-gray-700 text-sm font-medium overflow-hidden border-2 border-white",
            {content}
        }
    }
}
