//! The signed-in user's profile page.

use crate::edit::{EditError, Editable};
use crate::identity::CurrentUser;
use crate::notice::Notice;
use crate::project::seed_date;
use chrono::NaiveDate;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Free-form profile fields. No field depends on another.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub avatar: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub timezone: String,
}

impl Profile {
    /// Seed profile, taking identity fields from `user` when someone is signed in.
    pub fn seeded(user: Option<&CurrentUser>) -> Self {
        Profile {
            name: user.map_or_else(|| "John Doe".to_string(), |u| u.name.clone()),
            email: user.map_or_else(|| "john.doe@company.com".to_string(), |u| u.email.clone()),
            bio: "Product Manager with 5+ years of experience in team collaboration and project management.".to_string(),
            location: "San Francisco, CA".to_string(),
            join_date: seed_date(2023, 1, 15),
            avatar: user.and_then(|u| u.avatar.clone()).unwrap_or_default(),
            role: "Product Manager".to_string(),
            department: "Product Development".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            timezone: "Pacific Time (PT)".to_string(),
        }
    }
}

/// A labelled figure in the profile's activity summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const PROFILE_STATS: [ProfileStat; 4] = [
    ProfileStat {
        label: "Active Projects",
        value: "5",
    },
    ProfileStat {
        label: "Completed Tasks",
        value: "127",
    },
    ProfileStat {
        label: "Team Members",
        value: "23",
    },
    ProfileStat {
        label: "Success Rate",
        value: "94%",
    },
];

/// One entry in the profile's recent activity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileActivity {
    pub action: &'static str,
    pub time: &'static str,
}

pub const PROFILE_ACTIVITY: [ProfileActivity; 4] = [
    ProfileActivity {
        action: "Completed task \"Design Authentication Flow\"",
        time: "2 hours ago",
    },
    ProfileActivity {
        action: "Created new project \"Mobile App Redesign\"",
        time: "1 day ago",
    },
    ProfileActivity {
        action: "Updated task status in \"Website Refresh\"",
        time: "2 days ago",
    },
    ProfileActivity {
        action: "Added comment to \"API Integration\" discussion",
        time: "3 days ago",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePage {
    profile: Editable<Profile>,
}

impl ProfilePage {
    pub fn new(profile: Profile) -> Self {
        ProfilePage {
            profile: Editable::new(profile),
        }
    }

    pub fn seeded(user: Option<&CurrentUser>) -> Self {
        Self::new(Profile::seeded(user))
    }

    pub fn profile(&self) -> &Profile {
        self.profile.value()
    }

    pub fn is_editing(&self) -> bool {
        self.profile.is_editing()
    }

    pub fn stats(&self) -> &'static [ProfileStat] {
        &PROFILE_STATS
    }

    /// Latest actions, newest first.
    pub fn activity(&self) -> &'static [ProfileActivity] {
        &PROFILE_ACTIVITY
    }

    /// Edit button: enters edit mode, or saves when already editing.
    pub fn toggle_edit(&mut self) -> Option<Notice> {
        self.profile.toggle_edit().then(Self::saved)
    }

    pub fn edit(&mut self, change: impl FnOnce(&mut Profile)) -> Result<(), EditError> {
        self.profile.edit(change)
    }

    pub fn save(&mut self) -> Option<Notice> {
        self.profile.save().then(Self::saved)
    }

    fn saved() -> Notice {
        info!("profile saved");
        Notice::new(
            "Profile updated",
            "Your profile has been updated successfully.",
        )
    }

    /// Discards every change made since editing began, not only the identity fields.
    pub fn cancel(&mut self) -> bool {
        self.profile.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_profile_without_user_uses_fallbacks() {
        let profile = Profile::seeded(None);

        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, "john.doe@company.com");
        assert_eq!(profile.avatar, "");
        assert_eq!(profile.join_date, seed_date(2023, 1, 15));
    }

    #[test]
    fn seeded_profile_takes_identity_from_user() {
        let user = CurrentUser {
            id: "9".to_string(),
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            avatar: Some("ada.png".to_string()),
        };

        let profile = Profile::seeded(Some(&user));

        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.email, "ada@example.com");
        assert_eq!(profile.avatar, "ada.png");
    }

    #[test]
    fn save_keeps_every_edited_field() {
        let mut page = ProfilePage::seeded(None);

        page.toggle_edit();
        page.edit(|p| p.bio = "New bio".to_string()).unwrap();
        page.edit(|p| p.phone = "555".to_string()).unwrap();
        let notice = page.save().unwrap();

        assert_eq!(notice.title, "Profile updated");
        assert!(!page.is_editing());
        assert_eq!(page.profile().bio, "New bio");
        assert_eq!(page.profile().phone, "555");
    }

    #[test]
    fn cancel_restores_every_field() {
        let mut page = ProfilePage::seeded(None);

        page.toggle_edit();
        page.edit(|p| p.name = "Someone".to_string()).unwrap();
        page.edit(|p| p.location = "Berlin".to_string()).unwrap();
        page.edit(|p| p.department = String::new()).unwrap();
        page.cancel();

        assert!(!page.is_editing());
        assert_eq!(page.profile(), &Profile::seeded(None));
    }

    #[test]
    fn edits_rejected_while_viewing() {
        let mut page = ProfilePage::seeded(None);

        assert_eq!(
            page.edit(|p| p.bio = "x".to_string()),
            Err(EditError::NotEditing)
        );
    }

    #[test]
    fn toggle_edit_enters_then_saves() {
        let mut page = ProfilePage::seeded(None);

        assert_eq!(page.toggle_edit(), None);
        assert!(page.is_editing());
        page.edit(|p| p.timezone = "Central Time (CT)".to_string()).unwrap();
        let notice = page.toggle_edit();

        assert_eq!(notice.map(|n| n.title), Some("Profile updated".to_string()));
        assert!(!page.is_editing());
        assert_eq!(page.profile().timezone, "Central Time (CT)");
    }

    #[test]
    fn stats_are_fixed() {
        let page = ProfilePage::seeded(None);

        assert_eq!(page.stats().len(), 4);
        assert_eq!(page.stats()[1].label, "Completed Tasks");
        assert_eq!(page.stats()[3].value, "94%");
    }

    #[test]
    fn activity_is_newest_first() {
        let page = ProfilePage::seeded(None);

        let times: Vec<_> = page.activity().iter().map(|a| a.time).collect();

        assert_eq!(times, ["2 hours ago", "1 day ago", "2 days ago", "3 days ago"]);
        assert!(page.activity()[0].action.starts_with("Completed task"));
    }
}
