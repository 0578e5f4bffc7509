//! Project tasks and the status board on the project detail page.

use crate::id::{IdClock, RecordId};
use crate::is_blank;
use crate::notice::Notice;
use crate::project::seed_date;
use chrono::{DateTime, NaiveDate, Utc};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display name used when an assignee id does not match the roster.
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board columns, left to right.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Returned when a select value is not one of the known options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown option '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A person on the project's roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub avatar: Option<String>,
}

/// The person a task is assigned to, copied from the roster at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignee {
    pub id: RecordId,
    pub name: String,
    pub avatar: Option<String>,
}

impl Assignee {
    /// Resolves `id` against `roster`, falling back to the "Unassigned" placeholder.
    pub fn resolve(id: &str, roster: &[Member]) -> Self {
        match roster.iter().find(|m| m.id == id) {
            Some(member) => Assignee {
                id: member.id.clone(),
                name: member.name.clone(),
                avatar: member.avatar.clone(),
            },
            None => Assignee {
                id: id.to_string(),
                name: UNASSIGNED.to_string(),
                avatar: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee: Assignee,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Input collected by the "Create New Task" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee_id: RecordId,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

/// Tasks of one project together with the roster they are assigned from.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    roster: Vec<Member>,
    tasks: Vec<Task>,
    ids: IdClock,
}

impl TaskBoard {
    pub fn new(roster: Vec<Member>) -> Self {
        TaskBoard {
            roster,
            tasks: Vec::new(),
            ids: IdClock::new(),
        }
    }

    /// Board with the seed roster and tasks of the project detail page.
    pub fn seeded() -> Self {
        let roster = seed_roster();
        let tasks = seed_tasks(&roster);
        TaskBoard {
            roster,
            tasks,
            ids: IdClock::new(),
        }
    }

    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a new task in the todo column. Blank titles are ignored and return `None`.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn create_task(&mut self, draft: NewTask, now: DateTime<Utc>) -> Option<Notice> {
        if is_blank(&draft.title) {
            debug!("ignoring task with blank title");
            return None;
        }

        let task = Task {
            id: self.ids.next(now),
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Todo,
            assignee: Assignee::resolve(&draft.assignee_id, &self.roster),
            due_date: draft.due_date,
            priority: draft.priority,
        };
        info!(task_id = %task.id, assignee = %task.assignee.name, "task created");

        let notice = Notice::new(
            "Task created!",
            format!("{} has been added to the project.", task.title),
        );
        self.tasks.push(task);
        Some(notice)
    }

    /// Moves the task with `id` to `status`. Returns false when no task matches.
    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(task_id = id, "status change for unknown task");
            return false;
        };
        let updated = Task {
            status,
            ..self.tasks[index].clone()
        };
        debug!(task_id = id, status = status.as_str(), "task status changed");
        self.tasks[index] = updated;
        true
    }

    /// Tasks currently in `status`, in insertion order.
    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// All three columns, in board order.
    pub fn columns(&self) -> [(TaskStatus, Vec<&Task>); 3] {
        TaskStatus::ALL.map(|status| (status, self.column(status)))
    }
}

const JOHN_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";
const SARAH_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b73b3c79?w=100&h=100&fit=crop&crop=face";
const MIKE_AVATAR: &str =
    "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=100&h=100&fit=crop&crop=face";

/// The fixed member roster of the seed project.
pub fn seed_roster() -> Vec<Member> {
    vec![
        Member {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            avatar: Some(JOHN_AVATAR.to_string()),
        },
        Member {
            id: "2".to_string(),
            name: "Sarah Chen".to_string(),
            avatar: Some(SARAH_AVATAR.to_string()),
        },
        Member {
            id: "3".to_string(),
            name: "Mike Johnson".to_string(),
            avatar: Some(MIKE_AVATAR.to_string()),
        },
    ]
}

fn seed_tasks(roster: &[Member]) -> Vec<Task> {
    // Mike's seed task shows the initial without a picture.
    let mut mike = Assignee::resolve("3", roster);
    mike.avatar = None;

    vec![
        Task {
            id: "1".to_string(),
            title: "Design homepage wireframes".to_string(),
            description: "Create initial wireframes for the new homepage layout".to_string(),
            status: TaskStatus::Done,
            assignee: Assignee::resolve("1", roster),
            due_date: Some(seed_date(2024, 2, 10)),
            priority: Priority::High,
        },
        Task {
            id: "2".to_string(),
            title: "Implement responsive navigation".to_string(),
            description: "Code the responsive navigation component with mobile menu".to_string(),
            status: TaskStatus::InProgress,
            assignee: Assignee::resolve("2", roster),
            due_date: Some(seed_date(2024, 2, 15)),
            priority: Priority::Medium,
        },
        Task {
            id: "3".to_string(),
            title: "Content strategy planning".to_string(),
            description: "Plan content structure and copywriting approach".to_string(),
            status: TaskStatus::Todo,
            assignee: mike,
            due_date: Some(seed_date(2024, 2, 20)),
            priority: Priority::Low,
        },
    ]
}
