//! Projects listed on the dashboard.

use crate::id::{IdClock, RecordId};
use crate::is_blank;
use crate::notice::Notice;
use chrono::{DateTime, Days, NaiveDate, Utc};
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days between creating a project and its default due date.
pub const DEFAULT_DUE_IN_DAYS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on-hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    /// Number of members working on the project.
    pub members: u32,
    pub due_date: NaiveDate,
    pub status: ProjectStatus,
}

/// Input collected by the "Create New Project" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// State owned by the dashboard: the list of projects in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBoard {
    projects: Vec<Project>,
    ids: IdClock,
    due_in_days: u64,
}

impl Default for ProjectBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        ProjectBoard {
            projects: Vec::new(),
            ids: IdClock::new(),
            due_in_days: DEFAULT_DUE_IN_DAYS,
        }
    }

    /// Creates a board with the dashboard's seed projects.
    pub fn seeded() -> Self {
        ProjectBoard {
            projects: seed_projects(),
            ..Self::new()
        }
    }

    /// Overrides how far in the future new projects are due.
    pub fn with_due_in_days(mut self, days: u64) -> Self {
        self.due_in_days = days;
        self
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Appends a new active project. Blank names are ignored and return `None`.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub fn create(&mut self, draft: NewProject, now: DateTime<Utc>) -> Option<Notice> {
        if is_blank(&draft.name) {
            debug!("ignoring project with blank name");
            return None;
        }

        let due_date = now
            .date_naive()
            .checked_add_days(Days::new(self.due_in_days))
            .unwrap_or(NaiveDate::MAX);
        let project = Project {
            id: self.ids.next(now),
            name: draft.name,
            description: draft.description,
            progress: 0,
            members: 1,
            due_date,
            status: ProjectStatus::Active,
        };
        info!(project_id = %project.id, "project created");

        let notice = Notice::new(
            "Project created!",
            format!("{} has been added to your workspace.", project.name),
        );
        self.projects.push(project);
        Some(notice)
    }

    /// Number of projects whose status is active.
    pub fn active_count(&self) -> usize {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count()
    }

    /// Mean progress across all projects, rounded to the nearest percent.
    pub fn completion_rate(&self) -> u8 {
        if self.projects.is_empty() {
            return 0;
        }
        let total: u32 = self.projects.iter().map(|p| u32::from(p.progress)).sum();
        let count = self.projects.len() as u32;
        ((total + count / 2) / count) as u8
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Website Redesign".to_string(),
            description: "Complete overhaul of company website with new branding".to_string(),
            progress: 75,
            members: 5,
            due_date: seed_date(2024, 2, 15),
            status: ProjectStatus::Active,
        },
        Project {
            id: "2".to_string(),
            name: "Mobile App Development".to_string(),
            description: "Native iOS and Android app for customer engagement".to_string(),
            progress: 45,
            members: 8,
            due_date: seed_date(2024, 3, 30),
            status: ProjectStatus::Active,
        },
        Project {
            id: "3".to_string(),
            name: "Marketing Campaign Q1".to_string(),
            description: "Social media and digital marketing campaign for Q1".to_string(),
            progress: 100,
            members: 3,
            due_date: seed_date(2024, 1, 31),
            status: ProjectStatus::Completed,
        },
    ]
}

pub(crate) fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    fn draft(name: &str, description: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn seeded_board_has_three_projects() {
        let board = ProjectBoard::seeded();

        assert_eq!(board.len(), 3);
        assert_eq!(board.projects()[0].name, "Website Redesign");
        assert_eq!(board.projects()[2].status, ProjectStatus::Completed);
    }

    #[test]
    fn create_applies_defaults() {
        let mut board = ProjectBoard::new();

        let notice = board.create(draft("Launch", ""), now());

        assert!(notice.is_some());
        let project = &board.projects()[0];
        assert_eq!(project.name, "Launch");
        assert_eq!(project.description, "");
        assert_eq!(project.progress, 0);
        assert_eq!(project.members, 1);
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.due_date, seed_date(2024, 3, 2));
        assert_eq!(project.id, now().timestamp_millis().to_string());
    }

    #[test]
    fn create_reports_project_name() {
        let mut board = ProjectBoard::new();

        let notice = board.create(draft("Launch", "Go live"), now()).unwrap();

        assert_eq!(notice.title, "Project created!");
        assert_eq!(
            notice.description,
            "Launch has been added to your workspace."
        );
    }

    #[test]
    fn create_ignores_blank_name() {
        let mut board = ProjectBoard::seeded();

        assert_eq!(board.create(draft("", "desc"), now()), None);
        assert_eq!(board.create(draft("   \t", "desc"), now()), None);

        assert_eq!(board, ProjectBoard::seeded());
    }

    #[test]
    fn create_appends_after_seed() {
        let mut board = ProjectBoard::seeded();

        board.create(draft("Launch", ""), now());

        assert_eq!(board.len(), 4);
        assert_eq!(board.projects()[3].name, "Launch");
    }

    #[test]
    fn custom_due_horizon_is_used() {
        let mut board = ProjectBoard::new().with_due_in_days(7);

        board.create(draft("Sprint", ""), now());

        assert_eq!(board.projects()[0].due_date, seed_date(2024, 2, 8));
    }

    #[test]
    fn seed_stats_match_dashboard() {
        let board = ProjectBoard::seeded();

        assert_eq!(board.active_count(), 2);
        assert_eq!(board.completion_rate(), 73);
    }

    #[test]
    fn completion_rate_of_empty_board_is_zero() {
        assert_eq!(ProjectBoard::new().completion_rate(), 0);
    }

    #[test]
    fn status_names_match_badges() {
        assert_eq!(ProjectStatus::Active.as_str(), "active");
        assert_eq!(ProjectStatus::Completed.as_str(), "completed");
        assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
    }
}
