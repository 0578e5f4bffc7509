use crate::components::Avatar;
use crate::state::use_auth;
use chrono::Utc;
use dioxus::prelude::*;
use synergysphere_core::{Author, Discussion, Message};

#[component]
pub fn DiscussionPanel(discussion: Signal<Discussion>) -> Element {
    let mut discussion = discussion;
    let auth = use_auth();
    let mut draft = use_signal(String::new);

    let mut send = move || {
        let author = Author::from_user(auth.read().current_user());
        if discussion.write().post_message(&draft(), author, Utc::now()) {
            draft.set(String::new());
        }
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow-md",
            div { class: "p-6 border-b",
                h2 { class: "text-xl font-semibold text-gray-900", "Project Discussion" }
            }
            div { class: "p-6 space-y-4 max-h-96 overflow-y-auto",
                for message in discussion.read().messages().to_vec() {
                    MessageRow { key: "{message.id}", message: message.clone() }
                }
            }
            div { class: "p-6 border-t flex gap-2",
                input {
                    r#type: "text",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            send();
                        }
                    },
                    class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500",
                }
                button {
                    class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors",
                    onclick: move |_| send(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: Message) -> Element {
    let sent_at = message.timestamp.format("%b %-d, %-I:%M %p").to_string();

    rsx! {
        div { class: "flex gap-3",
            Avatar {
                name: message.author.name.clone(),
                src: message.author.avatar.clone().unwrap_or_default(),
            }
            div { class: "flex-1",
                div { class: "flex items-center gap-2 mb-1",
                    span { class: "font-medium text-sm", "{message.author.name}" }
                    span { class: "text-xs text-gray-500", "{sent_at}" }
                }
                p { class: "text-sm text-gray-700", "{message.content}" }
            }
        }
    }
}
