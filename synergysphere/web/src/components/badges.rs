use dioxus::prelude::*;
use synergysphere_core::{Priority, ProjectStatus, TaskStatus};

pub fn project_status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "bg-purple-100 text-purple-800",
        ProjectStatus::Completed => "bg-green-100 text-green-800",
        ProjectStatus::OnHold => "bg-yellow-100 text-yellow-800",
    }
}

pub fn task_status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "bg-gray-100 text-gray-800",
        TaskStatus::InProgress => "bg-yellow-100 text-yellow-800",
        TaskStatus::Done => "bg-green-100 text-green-800",
    }
}

pub fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "bg-red-100 text-red-800",
        Priority::Medium => "bg-yellow-100 text-yellow-800",
        Priority::Low => "bg-gray-100 text-gray-700",
    }
}

#[component]
pub fn ProjectStatusBadge(status: ProjectStatus) -> Element {
    let color = project_status_class(status);
    rsx! {
        span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{status.as_str()}" }
    }
}

#[component]
pub fn TaskStatusBadge(status: TaskStatus) -> Element {
    let color = task_status_class(status);
    rsx! {
        span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{status.label()}" }
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    let color = priority_class(priority);
    rsx! {
        span { class: "px-2 py-1 rounded-full text-xs font-medium {color}", "{priority.as_str()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_priority_is_red() {
        assert!(priority_class(Priority::High).contains("red"));
    }

    #[test]
    fn every_status_has_a_distinct_color() {
        let classes: std::collections::HashSet<_> =
            TaskStatus::ALL.iter().map(|s| task_status_class(*s)).collect();
        assert_eq!(classes.len(), 3);
    }
}
