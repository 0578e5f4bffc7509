use crate::components::Header;
use crate::config::AppConfig;
use crate::state::{use_current_user, use_toasts};
use chrono::Utc;
use dioxus::prelude::*;
use synergysphere_core::{NewProject, ProjectBoard};

mod components;

/// Shown in the summary; not derived from the project list.
const TEAM_MEMBERS: u32 = 12;

#[component]
pub fn Dashboard() -> Element {
    let due_in_days = use_context::<AppConfig>().projects.due_in_days;
    let user = use_current_user();
    let toasts = use_toasts();
    let mut board = use_signal(move || ProjectBoard::seeded().with_due_in_days(due_in_days));
    let mut show_create = use_signal(|| false);

    let handle_create = move |draft: NewProject| {
        let notice = board.write().create(draft, Utc::now());
        if notice.is_some() {
            show_create.set(false);
        }
        toasts.show_opt(notice);
    };

    let first_name = user
        .as_ref()
        .map(|u| u.first_name().to_string())
        .unwrap_or_else(|| "there".to_string());

    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            Header {}

            main { class: "max-w-6xl mx-auto px-4 py-8",
                div { class: "mb-8",
                    h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Welcome back, {first_name}! 👋" }
                    p { class: "text-gray-600", "Here's what's happening with your projects today." }
                }

                components::StatsCards {
                    active_projects: board.read().active_count(),
                    team_members: TEAM_MEMBERS,
                    completion_rate: board.read().completion_rate(),
                }

                div { class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold text-gray-900", "Your Projects" }
                    button {
                        class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors shadow-elegant",
                        onclick: move |_| show_create.set(true),
                        "+ New Project"
                    }
                }

                components::ProjectsGrid { projects: board.read().projects().to_vec() }
            }

            if show_create() {
                components::CreateProjectDialog {
                    on_submit: handle_create,
                    on_cancel: move |_| show_create.set(false),
                }
            }
        }
    }
}
