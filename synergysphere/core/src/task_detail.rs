//! State behind the task detail page: one editable task plus its comment thread.

use crate::discussion::seed_instant;
use crate::edit::{EditError, Editable};
use crate::id::{IdClock, RecordId};
use crate::is_blank;
use crate::notice::Notice;
use crate::project::seed_date;
use crate::task::{Assignee, Member, Priority, Task, TaskStatus, seed_roster};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Author recorded on comments posted from the task page.
pub const COMMENT_AUTHOR: &str = "Current User";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Comment {
    pub id: RecordId,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A task opened on its own page.
///
/// The task fields go through the edit/view machine; comments are appended
/// directly and are never part of an edit snapshot, so cancelling an edit
/// cannot drop a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDetail {
    task: Editable<Task>,
    roster: Vec<Member>,
    comments: Vec<Comment>,
    ids: IdClock,
}

impl TaskDetail {
    pub fn new(task: Task, roster: Vec<Member>) -> Self {
        TaskDetail {
            task: Editable::new(task),
            roster,
            comments: Vec::new(),
            ids: IdClock::new(),
        }
    }

    /// Seed task shown for any `task_id`, carrying that id.
    pub fn seeded(task_id: &str) -> Self {
        let task = Task {
            id: task_id.to_string(),
            title: "Design User Authentication Flow".to_string(),
            description: "Create wireframes and mockups for the login, signup, and password reset flows. Include mobile responsive designs.".to_string(),
            status: TaskStatus::InProgress,
            assignee: Assignee {
                id: "2".to_string(),
                name: "Sarah Chen".to_string(),
                avatar: None,
            },
            due_date: Some(seed_date(2024, 2, 15)),
            priority: Priority::High,
        };
        TaskDetail {
            comments: vec![
                Comment {
                    id: "1".to_string(),
                    author: "John Doe".to_string(),
                    content: "Started working on the wireframes. Should have initial drafts ready by tomorrow.".to_string(),
                    timestamp: seed_instant(2024, 1, 10, 10, 30),
                },
                Comment {
                    id: "2".to_string(),
                    author: "Sarah Chen".to_string(),
                    content: "Thanks! Make sure to include the forgot password flow as well.".to_string(),
                    timestamp: seed_instant(2024, 1, 10, 14, 15),
                },
            ],
            ..TaskDetail::new(task, seed_roster())
        }
    }

    pub fn task(&self) -> &Task {
        self.task.value()
    }

    /// Members the task can be assigned to.
    pub fn roster(&self) -> &[Member] {
        &self.roster
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn is_editing(&self) -> bool {
        self.task.is_editing()
    }

    /// Edit button: enters edit mode, or saves when already editing.
    pub fn toggle_edit(&mut self) -> Option<Notice> {
        self.task.toggle_edit().then(|| self.saved())
    }

    /// Mutates the task while in edit mode. Any value is accepted.
    pub fn edit(&mut self, change: impl FnOnce(&mut Task)) -> Result<(), EditError> {
        self.task.edit(change)
    }

    /// Assigns the task to the roster member `assignee_id`, or to
    /// "Unassigned" when nobody on the roster has that id.
    pub fn reassign(&mut self, assignee_id: &str) -> Result<(), EditError> {
        let assignee = Assignee::resolve(assignee_id, &self.roster);
        self.task.edit(|t| t.assignee = assignee)
    }

    /// Leaves edit mode keeping the current fields.
    pub fn save(&mut self) -> Option<Notice> {
        self.task.save().then(|| self.saved())
    }

    fn saved(&self) -> Notice {
        info!(task_id = %self.task().id, "task saved");
        Notice::new("Task updated", "Your changes have been saved successfully.")
    }

    /// Leaves edit mode restoring the fields from when editing began.
    pub fn cancel(&mut self) -> bool {
        self.task.cancel()
    }

    /// Appends a comment from [`COMMENT_AUTHOR`]. Blank content is ignored.
    pub fn add_comment(&mut self, content: &str, now: DateTime<Utc>) -> Option<Notice> {
        if is_blank(content) {
            debug!("ignoring blank comment");
            return None;
        }
        let comment = Comment {
            id: self.ids.next(now),
            author: COMMENT_AUTHOR.to_string(),
            content: content.to_string(),
            timestamp: now,
        };
        debug!(task_id = %self.task().id, comment_id = %comment.id, "comment added");
        self.comments.push(comment);
        Some(Notice::new("Comment added", "Your comment has been posted."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        seed_instant(2024, 1, 11, 9, 0)
    }

    #[test]
    fn seeded_detail_uses_route_id() {
        let detail = TaskDetail::seeded("7");

        assert_eq!(detail.task().id, "7");
        assert_eq!(detail.task().assignee.name, "Sarah Chen");
        assert_eq!(detail.comments().len(), 2);
        assert!(!detail.is_editing());
    }

    #[test]
    fn fields_are_locked_while_viewing() {
        let mut detail = TaskDetail::seeded("1");

        let result = detail.edit(|t| t.title = "Changed".to_string());

        assert_eq!(result, Err(EditError::NotEditing));
        assert_eq!(detail.task().title, "Design User Authentication Flow");
    }

    #[test]
    fn toggle_edit_then_save_keeps_changes() {
        let mut detail = TaskDetail::seeded("1");

        assert_eq!(detail.toggle_edit(), None);
        detail.edit(|t| t.title = String::new()).unwrap();
        detail.edit(|t| t.priority = Priority::Low).unwrap();
        let notice = detail.toggle_edit().unwrap();

        assert_eq!(notice.title, "Task updated");
        assert!(!detail.is_editing());
        assert_eq!(detail.task().title, "");
        assert_eq!(detail.task().priority, Priority::Low);
    }

    #[test]
    fn cancel_restores_task_but_keeps_comments() {
        let mut detail = TaskDetail::seeded("1");

        detail.toggle_edit();
        detail.edit(|t| t.description = "draft".to_string()).unwrap();
        detail.add_comment("while editing", now());
        let cancelled = detail.cancel();

        assert!(cancelled);
        assert_eq!(detail.task(), TaskDetail::seeded("1").task());
        assert_eq!(detail.comments().len(), 3);
    }

    #[test]
    fn reassign_picks_roster_member_and_cancel_restores_it() {
        let mut detail = TaskDetail::seeded("1");

        detail.toggle_edit();
        detail.reassign("3").unwrap();
        assert_eq!(detail.task().assignee.name, "Mike Johnson");
        detail.cancel();

        assert_eq!(detail.task().assignee.id, "2");
        assert_eq!(detail.task().assignee.name, "Sarah Chen");
    }

    #[test]
    fn reassign_to_unknown_member_is_unassigned() {
        let mut detail = TaskDetail::seeded("1");

        detail.toggle_edit();
        detail.reassign("42").unwrap();

        assert_eq!(detail.task().assignee.name, crate::task::UNASSIGNED);
        assert_eq!(detail.reassign("1"), Ok(()));
        detail.save();
        assert_eq!(detail.reassign("1"), Err(EditError::NotEditing));
    }

    #[test]
    fn save_while_viewing_reports_nothing() {
        let mut detail = TaskDetail::seeded("1");

        assert_eq!(detail.save(), None);
    }

    #[test]
    fn add_comment_appends_with_synthetic_author() {
        let mut detail = TaskDetail::seeded("1");

        let notice = detail.add_comment("Looks great", now()).unwrap();

        assert_eq!(notice.title, "Comment added");
        let comment = detail.comments().last().unwrap();
        assert_eq!(comment.author, COMMENT_AUTHOR);
        assert_eq!(comment.content, "Looks great");
        assert_eq!(comment.timestamp, now());
    }

    #[test]
    fn blank_comment_is_ignored() {
        let mut detail = TaskDetail::seeded("1");

        assert_eq!(detail.add_comment("   ", now()), None);
        assert_eq!(detail.comments().len(), 2);
    }
}
