use crate::components::ProjectStatusBadge;
use crate::Route;
use dioxus::prelude::*;
use synergysphere_core::{NewProject, Project};

/// Three summary cards above the project grid.
#[component]
pub fn StatsCards(active_projects: usize, team_members: u32, completion_rate: u8) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
            StatCard { title: "Active Projects", value: "{active_projects}", hint: "Currently in progress" }
            StatCard { title: "Team Members", value: "{team_members}", hint: "Across all projects" }
            StatCard { title: "Completion Rate", value: "{completion_rate}%", hint: "Average project progress" }
        }
    }
}

#[component]
fn StatCard(title: String, value: String, hint: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6",
            h3 { class: "text-sm font-medium text-gray-600 mb-2", "{title}" }
            div { class: "text-2xl font-bold", "{value}" }
            p { class: "text-xs text-gray-500", "{hint}" }
        }
    }
}

#[component]
pub fn ProjectsGrid(projects: Vec<Project>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
            for project in projects {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}

/// Card linking to the project detail page.
#[component]
pub fn ProjectCard(project: Project) -> Element {
    let due = project.due_date.format("%b %-d, %Y").to_string();

    rsx! {
        Link {
            to: Route::ProjectDetail { project_id: project.id.clone() },
            class: "block bg-white rounded-lg shadow-md p-6 hover:shadow-lg hover:-translate-y-1 transition-all duration-300",
            div { class: "flex justify-between items-start mb-2",
                h3 { class: "text-lg font-semibold text-gray-900", "{project.name}" }
                ProjectStatusBadge { status: project.status }
            }
            p { class: "text-sm text-gray-600 mb-4 line-clamp-2", "{project.description}" }
            div { class: "space-y-4",
                div {
                    div { class: "flex justify-between text-sm mb-2",
                        span { "Progress" }
                        span { "{project.progress}%" }
                    }
                    div { class: "h-2 bg-gray-200 rounded-full overflow-hidden",
                        div { class: "h-2 bg-purple-600", style: "width: {project.progress}%" }
                    }
                }
                div { class: "flex items-center justify-between text-sm text-gray-500",
                    span { "👥 {project.members} members" }
                    span { "📅 {due}" }
                }
            }
        }
    }
}

/// Modal collecting the name and description of a new project.
#[component]
pub fn CreateProjectDialog(on_submit: EventHandler<NewProject>, on_cancel: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(NewProject {
            name: name(),
            description: description(),
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-white rounded-lg shadow-xl p-6 w-full max-w-md mx-4",
                onclick: move |evt| evt.stop_propagation(),

                h2 { class: "text-2xl font-bold text-gray-900 mb-2", "Create New Project" }
                p { class: "text-gray-600 mb-6", "Start a new collaboration project for your team." }

                form { onsubmit: handle_submit, class: "space-y-4",
                    div {
                        label { r#for: "project-name", class: "block text-sm font-medium mb-1", "Project Name" }
                        input {
                            id: "project-name",
                            r#type: "text",
                            placeholder: "Enter project name...",
                            value: "{name}",
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            autofocus: true,
                        }
                    }
                    div {
                        label { r#for: "project-description", class: "block text-sm font-medium mb-1", "Description" }
                        input {
                            id: "project-description",
                            r#type: "text",
                            placeholder: "Brief description of the project...",
                            value: "{description}",
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                        }
                    }
                    div { class: "flex space-x-3",
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 bg-purple-600 text-white rounded-lg hover:bg-purple-700 transition-colors font-medium",
                            "Create Project"
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
