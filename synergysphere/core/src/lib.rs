//! Core records and page state for SynergySphere.
//!
//! Every page of the app owns exactly one of the containers exported here and
//! mutates it through the operations they expose. Nothing is persisted.
pub mod discussion;
pub mod edit;
pub mod id;
pub mod identity;
pub mod notice;
pub mod profile;
pub mod project;
pub mod settings;
pub mod task;
pub mod task_detail;

pub use discussion::{Author, Discussion, Message};
pub use edit::{EditError, Editable};
pub use id::{IdClock, RecordId};
pub use identity::{AuthContext, CurrentUser};
pub use notice::{Notice, Severity};
pub use profile::{Profile, ProfileActivity, ProfilePage, ProfileStat};
pub use project::{NewProject, Project, ProjectBoard, ProjectStatus};
pub use settings::{
    Appearance, Language, NotificationKey, Notifications, PreferenceChange, PreferenceGroup,
    Privacy, Settings, SettingsError, Theme, Timezone, Visibility,
};
pub use task::{
    Assignee, Member, NewTask, Priority, Task, TaskBoard, TaskStatus, UNASSIGNED, UnknownVariant,
};
pub use task_detail::{Comment, TaskDetail};

/// Returns true when the input has no visible characters.
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}
