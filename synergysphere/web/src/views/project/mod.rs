use crate::components::{Avatar, BackLink, Header};
use crate::Route;
use dioxus::prelude::*;
use synergysphere_core::{Discussion, ProjectBoard, TaskBoard};

mod discussion;
mod tasks;

/// Project shown when the route id is not on the seeded board.
const FALLBACK_PROJECT_ID: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    Tasks,
    Discussion,
}

/// Project page with a task board and the project discussion.
#[component]
pub fn ProjectDetail(project_id: String) -> Element {
    let board = use_signal(TaskBoard::seeded);
    let discussion = use_signal(Discussion::seeded);
    let mut tab = use_signal(|| Tab::Tasks);

    let seeded = ProjectBoard::seeded();
    let (name, description) = seeded
        .get(&project_id)
        .or_else(|| seeded.get(FALLBACK_PROJECT_ID))
        .map(|p| (p.name.clone(), p.description.clone()))
        .unwrap_or_default();

    let tab_class = move |t: Tab| {
        if tab() == t {
            "px-4 py-2 rounded-md text-sm font-medium bg-white shadow text-gray-900"
        } else {
            "px-4 py-2 rounded-md text-sm font-medium text-gray-600 hover:text-gray-900"
        }
    };

    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            Header {}

            main { class: "max-w-6xl mx-auto px-4 py-8",
                div { class: "mb-6", BackLink { to: Route::Dashboard {}, label: "Back to Dashboard" } }

                div { class: "flex items-center justify-between mb-8",
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900", "{name}" }
                        p { class: "text-gray-600", "{description}" }
                    }
                    div { class: "flex -space-x-2",
                        for member in board.read().roster().to_vec() {
                            Avatar {
                                key: "{member.id}",
                                name: member.name.clone(),
                                src: member.avatar.clone().unwrap_or_default(),
                            }
                        }
                    }
                }

                div { class: "inline-flex bg-gray-100 rounded-lg p-1 mb-6",
                    button { class: tab_class(Tab::Tasks), onclick: move |_| tab.set(Tab::Tasks), "Tasks" }
                    button { class: tab_class(Tab::Discussion), onclick: move |_| tab.set(Tab::Discussion), "Discussion" }
                }

                if tab() == Tab::Tasks {
                    tasks::TaskBoardPanel { project_id: project_id.clone(), board }
                } else {
                    discussion::DiscussionPanel { discussion }
                }
            }
        }
    }
}
