use crate::components::{Avatar, BackLink, Header, PriorityBadge, TaskStatusBadge};
use crate::state::use_toasts;
use crate::Route;
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use synergysphere_core::{Comment, Priority, Task, TaskDetail, TaskStatus};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

fn edit_task(detail: &mut Signal<TaskDetail>, change: impl FnOnce(&mut Task)) {
    if let Err(e) = detail.write().edit(change) {
        tracing::warn!(%e, "dropping task edit");
    }
}

/// Single task with inline editing and a comment thread.
#[component]
pub fn TaskView(project_id: String, task_id: String) -> Element {
    let seed_id = task_id.clone();
    let mut detail = use_signal(move || TaskDetail::seeded(&seed_id));
    let toasts = use_toasts();
    let mut comment = use_signal(String::new);

    let handle_add_comment = move |_| {
        let notice = detail.write().add_comment(&comment(), Utc::now());
        if notice.is_some() {
            comment.set(String::new());
        }
        toasts.show_opt(notice);
    };

    let task = detail.read().task().clone();
    let editing = detail.read().is_editing();
    let comments = detail.read().comments().to_vec();
    let roster = detail.read().roster().to_vec();
    let due_display = task
        .due_date
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| "No due date".to_string());
    let due_input = task
        .due_date
        .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-gradient-surface",
            Header {}

            main { class: "max-w-4xl mx-auto px-4 py-8",
                div { class: "mb-6",
                    BackLink { to: Route::ProjectDetail { project_id: project_id.clone() }, label: "Back to Project" }
                }

                div { class: "bg-white rounded-lg shadow-md p-6 mb-6",
                    div { class: "flex items-start justify-between mb-6 gap-4",
                        if editing {
                            input {
                                r#type: "text",
                                value: "{task.title}",
                                oninput: move |evt: FormEvent| edit_task(&mut detail, |t| t.title = evt.value()),
                                class: "flex-1 text-2xl font-bold px-3 py-2 border border-gray-300 rounded-lg",
                            }
                        } else {
                            h1 { class: "text-2xl font-bold text-gray-900", "{task.title}" }
                        }
                        div { class: "flex gap-2",
                            if editing {
                                button {
                                    class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50",
                                    onclick: move |_| {
                                        detail.write().cancel();
                                    },
                                    "Cancel"
                                }
                            }
                            button {
                                class: "px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 font-medium",
                                onclick: move |_| {
                                    let notice = detail.write().toggle_edit();
                                    toasts.show_opt(notice);
                                },
                                if editing { "Save" } else { "Edit" }
                            }
                        }
                    }

                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-6",
                        div {
                            h3 { class: "text-sm font-medium text-gray-500 mb-2", "Status" }
                            if editing {
                                select {
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                    onchange: move |evt: FormEvent| {
                                        if let Ok(status) = evt.value().parse::<TaskStatus>() {
                                            edit_task(&mut detail, |t| t.status = status);
                                        }
                                    },
                                    for status in TaskStatus::ALL {
                                        option { value: "{status.as_str()}", selected: status == task.status, "{status.label()}" }
                                    }
                                }
                            } else {
                                TaskStatusBadge { status: task.status }
                            }
                        }
                        div {
                            h3 { class: "text-sm font-medium text-gray-500 mb-2", "Priority" }
                            if editing {
                                select {
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                    onchange: move |evt: FormEvent| {
                                        if let Ok(priority) = evt.value().parse::<Priority>() {
                                            edit_task(&mut detail, |t| t.priority = priority);
                                        }
                                    },
                                    for priority in Priority::ALL {
                                        option { value: "{priority.as_str()}", selected: priority == task.priority, "{priority.label()}" }
                                    }
                                }
                            } else {
                                PriorityBadge { priority: task.priority }
                            }
                        }
                        div {
                            h3 { class: "text-sm font-medium text-gray-500 mb-2", "Assignee" }
                            if editing {
                                select {
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                    onchange: move |evt: FormEvent| {
                                        if let Err(e) = detail.write().reassign(&evt.value()) {
                                            tracing::warn!(%e, "dropping reassignment");
                                        }
                                    },
                                    for member in roster {
                                        option {
                                            key: "{member.id}",
                                            value: "{member.id}",
                                            selected: member.id == task.assignee.id,
                                            "{member.name}"
                                        }
                                    }
                                }
                            } else {
                                div { class: "flex items-center gap-2",
                                    Avatar {
                                        name: task.assignee.name.clone(),
                                        src: task.assignee.avatar.clone().unwrap_or_default(),
                                    }
                                    span { "{task.assignee.name}" }
                                }
                            }
                        }
                        div {
                            h3 { class: "text-sm font-medium text-gray-500 mb-2", "Due Date" }
                            if editing {
                                input {
                                    r#type: "date",
                                    value: "{due_input}",
                                    oninput: move |evt: FormEvent| {
                                        let due = NaiveDate::parse_from_str(&evt.value(), DATE_INPUT_FORMAT).ok();
                                        edit_task(&mut detail, |t| t.due_date = due);
                                    },
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                }
                            } else {
                                span { "📅 {due_display}" }
                            }
                        }
                    }

                    div {
                        h3 { class: "text-sm font-medium text-gray-500 mb-2", "Description" }
                        if editing {
                            textarea {
                                rows: "4",
                                value: "{task.description}",
                                oninput: move |evt: FormEvent| edit_task(&mut detail, |t| t.description = evt.value()),
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                            }
                        } else {
                            p { class: "text-gray-700", "{task.description}" }
                        }
                    }
                }

                div { class: "bg-white rounded-lg shadow-md p-6",
                    h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Comments ({comments.len()})" }
                    div { class: "space-y-4 mb-6",
                        for c in comments {
                            CommentRow { key: "{c.id}", comment: c.clone() }
                        }
                    }
                    div { class: "space-y-2",
                        textarea {
                            rows: "3",
                            placeholder: "Add a comment...",
                            value: "{comment}",
                            oninput: move |evt: FormEvent| comment.set(evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500",
                        }
                        button {
                            class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors",
                            onclick: handle_add_comment,
                            "Add Comment"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment) -> Element {
    let posted_at = comment.timestamp.format("%b %-d, %Y at %-I:%M %p").to_string();

    rsx! {
        div { class: "flex gap-3",
            Avatar { name: comment.author.clone() }
            div { class: "flex-1",
                div { class: "flex items-center gap-2 mb-1",
                    span { class: "font-medium text-sm", "{comment.author}" }
                    span { class: "text-xs text-gray-500", "{posted_at}" }
                }
                p { class: "text-sm text-gray-700", "{comment.content}" }
            }
        }
    }
}
