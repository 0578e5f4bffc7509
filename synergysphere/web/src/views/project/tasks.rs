use crate::components::{Avatar, PriorityBadge};
use crate::state::use_toasts;
use crate::Route;
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use synergysphere_core::{Member, NewTask, Priority, Task, TaskBoard, TaskStatus};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Three status columns plus the new-task dialog.
#[component]
pub fn TaskBoardPanel(project_id: String, board: Signal<TaskBoard>) -> Element {
    let mut board = board;
    let toasts = use_toasts();
    let mut show_create = use_signal(|| false);

    let handle_create = move |draft: NewTask| {
        let notice = board.write().create_task(draft, Utc::now());
        if notice.is_some() {
            show_create.set(false);
        }
        toasts.show_opt(notice);
    };

    let columns: Vec<(TaskStatus, Vec<Task>)> = board
        .read()
        .columns()
        .into_iter()
        .map(|(status, tasks)| (status, tasks.into_iter().cloned().collect()))
        .collect();

    rsx! {
        div { class: "flex items-center justify-between mb-6",
            h2 { class: "text-2xl font-bold text-gray-900", "Tasks" }
            button {
                class: "bg-purple-600 text-white px-4 py-2 rounded-lg font-medium hover:bg-purple-700 transition-colors shadow-elegant",
                onclick: move |_| show_create.set(true),
                "+ New Task"
            }
        }

        div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
            for (status, tasks) in columns {
                div { key: "{status.as_str()}", class: "space-y-4",
                    div { class: "flex items-center justify-between",
                        h3 { class: "font-semibold text-gray-900", "{status.label()}" }
                        span { class: "px-2 py-1 rounded-full text-xs bg-gray-100 text-gray-700", "{tasks.len()}" }
                    }
                    for task in tasks {
                        TaskCard { key: "{task.id}", project_id: project_id.clone(), task: task.clone(), board }
                    }
                }
            }
        }

        if show_create() {
            CreateTaskDialog {
                roster: board.read().roster().to_vec(),
                on_submit: handle_create,
                on_cancel: move |_| show_create.set(false),
            }
        }
    }
}

#[component]
fn TaskCard(project_id: String, task: Task, board: Signal<TaskBoard>) -> Element {
    let mut board = board;
    let task_id = task.id.clone();

    let handle_status = move |evt: FormEvent| match evt.value().parse::<TaskStatus>() {
        Ok(status) => {
            board.write().set_task_status(&task_id, status);
        }
        Err(e) => tracing::warn!(%e, "ignoring status change"),
    };

    let due = task
        .due_date
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-4 hover:shadow-lg transition-shadow space-y-3",
            div { class: "flex items-start justify-between",
                Link {
                    to: Route::TaskView { project_id: project_id.clone(), task_id: task.id.clone() },
                    class: "font-medium text-gray-900 hover:text-purple-700",
                    "{task.title}"
                }
                PriorityBadge { priority: task.priority }
            }
            if !task.description.is_empty() {
                p { class: "text-sm text-gray-600", "{task.description}" }
            }
            div { class: "flex items-center justify-between text-sm text-gray-500",
                div { class: "flex items-center gap-2",
                    Avatar {
                        name: task.assignee.name.clone(),
                        src: task.assignee.avatar.clone().unwrap_or_default(),
                        size: "w-6 h-6",
                    }
                    span { "{task.assignee.name}" }
                }
                if !due.is_empty() {
                    span { "📅 {due}" }
                }
            }
            select {
                class: "w-full px-2 py-1 border border-gray-300 rounded-md text-sm",
                onchange: handle_status,
                for status in TaskStatus::ALL {
                    option {
                        value: "{status.as_str()}",
                        selected: status == task.status,
                        "{status.label()}"
                    }
                }
            }
        }
    }
}

/// Modal collecting a new task. Priority starts at medium.
#[component]
fn CreateTaskDialog(
    roster: Vec<Member>,
    on_submit: EventHandler<NewTask>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut assignee_id = use_signal(String::new);
    let mut due = use_signal(String::new);
    let mut priority = use_signal(Priority::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(NewTask {
            title: title(),
            description: description(),
            assignee_id: assignee_id(),
            due_date: NaiveDate::parse_from_str(&due(), DATE_INPUT_FORMAT).ok(),
            priority: priority(),
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-6", "Create New Task" }

                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { r#for: "task-title", class: "block text-sm font-medium mb-1", "Title" }
                        input {
                            id: "task-title",
                            r#type: "text",
                            placeholder: "Task title...",
                            value: "{title}",
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500",
                            autofocus: true,
                        }
                    }
                    div {
                        label { r#for: "task-description", class: "block text-sm font-medium mb-1", "Description" }
                        textarea {
                            id: "task-description",
                            placeholder: "Task description...",
                            value: "{description}",
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500",
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4",
                        div {
                            label { r#for: "task-assignee", class: "block text-sm font-medium mb-1", "Assignee" }
                            select {
                                id: "task-assignee",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| assignee_id.set(evt.value()),
                                option { value: "", "Select member" }
                                for member in roster {
                                    option { key: "{member.id}", value: "{member.id}", "{member.name}" }
                                }
                            }
                        }
                        div {
                            label { r#for: "task-priority", class: "block text-sm font-medium mb-1", "Priority" }
                            select {
                                id: "task-priority",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(p) = evt.value().parse() {
                                        priority.set(p);
                                    }
                                },
                                for p in Priority::ALL {
                                    option { value: "{p.as_str()}", selected: p == priority(), "{p.label()}" }
                                }
                            }
                        }
                    }
                    div {
                        label { r#for: "task-due", class: "block text-sm font-medium mb-1", "Due Date" }
                        input {
                            id: "task-due",
                            r#type: "date",
                            value: "{due}",
                            oninput: move |evt: FormEvent| due.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg",
                        }
                    }
                    div { class: "flex space-x-3",
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                            "Create Task"
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            class: "px-4 py-2 border border-gray-300 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors",
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
