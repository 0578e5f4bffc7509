//! User preferences shown on the settings page.
//!
//! Preferences live in three independent groups. A change replaces exactly one
//! leaf value and always succeeds once it has been parsed.

use crate::notice::Notice;
use crate::task::UnknownVariant;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declares a select-backed preference enum with its option values and labels.
macro_rules! options {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $value))]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value used by the select option.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Text shown to the user.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| UnknownVariant(s.to_string()))
            }
        }
    };
}

options! {
    Theme {
        Light => ("light", "Light"),
        Dark => ("dark", "Dark"),
        System => ("system", "System"),
    }
}

options! {
    Language {
        English => ("en", "English"),
        Spanish => ("es", "Spanish"),
        French => ("fr", "French"),
        German => ("de", "German"),
    }
}

options! {
    Timezone {
        LosAngeles => ("America/Los_Angeles", "Pacific Time (PT)"),
        Denver => ("America/Denver", "Mountain Time (MT)"),
        Chicago => ("America/Chicago", "Central Time (CT)"),
        NewYork => ("America/New_York", "Eastern Time (ET)"),
        London => ("Europe/London", "London (GMT)"),
        Paris => ("Europe/Paris", "Paris (CET)"),
        Tokyo => ("Asia/Tokyo", "Tokyo (JST)"),
    }
}

options! {
    /// Who can see the user's profile.
    Visibility {
        Public => ("public", "Public"),
        Team => ("team", "Team only"),
        Private => ("private", "Private"),
    }
}

options! {
    /// One of the six notification switches.
    NotificationKey {
        Email => ("email", "Email notifications"),
        Push => ("push", "Push notifications"),
        TaskUpdates => ("taskUpdates", "Task updates"),
        ProjectMessages => ("projectMessages", "Project messages"),
        WeeklyDigest => ("weeklyDigest", "Weekly digest"),
        Marketing => ("marketing", "Marketing emails"),
    }
}

options! {
    PreferenceGroup {
        Notifications => ("notifications", "Notifications"),
        Appearance => ("appearance", "Appearance"),
        Privacy => ("privacy", "Privacy & Security"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Notifications {
    pub email: bool,
    pub push: bool,
    pub task_updates: bool,
    pub project_messages: bool,
    pub weekly_digest: bool,
    pub marketing: bool,
}

impl Default for Notifications {
    fn default() -> Self {
        Notifications {
            email: true,
            push: true,
            task_updates: true,
            project_messages: true,
            weekly_digest: false,
            marketing: false,
        }
    }
}

impl Notifications {
    pub fn get(&self, key: NotificationKey) -> bool {
        match key {
            NotificationKey::Email => self.email,
            NotificationKey::Push => self.push,
            NotificationKey::TaskUpdates => self.task_updates,
            NotificationKey::ProjectMessages => self.project_messages,
            NotificationKey::WeeklyDigest => self.weekly_digest,
            NotificationKey::Marketing => self.marketing,
        }
    }

    fn slot(&mut self, key: NotificationKey) -> &mut bool {
        match key {
            NotificationKey::Email => &mut self.email,
            NotificationKey::Push => &mut self.push,
            NotificationKey::TaskUpdates => &mut self.task_updates,
            NotificationKey::ProjectMessages => &mut self.project_messages,
            NotificationKey::WeeklyDigest => &mut self.weekly_digest,
            NotificationKey::Marketing => &mut self.marketing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Appearance {
    pub theme: Theme,
    pub language: Language,
    pub timezone: Timezone,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            theme: Theme::System,
            language: Language::English,
            timezone: Timezone::LosAngeles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Privacy {
    pub profile_visibility: Visibility,
    pub activity_status: bool,
    pub task_progress: bool,
}

impl Default for Privacy {
    fn default() -> Self {
        Privacy {
            profile_visibility: Visibility::Team,
            activity_status: true,
            task_progress: true,
        }
    }
}

/// A single leaf replacement inside one preference group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Notification(NotificationKey, bool),
    Theme(Theme),
    Language(Language),
    Timezone(Timezone),
    ProfileVisibility(Visibility),
    ActivityStatus(bool),
    TaskProgress(bool),
}

impl PreferenceChange {
    pub fn group(&self) -> PreferenceGroup {
        match self {
            PreferenceChange::Notification(..) => PreferenceGroup::Notifications,
            PreferenceChange::Theme(_)
            | PreferenceChange::Language(_)
            | PreferenceChange::Timezone(_) => PreferenceGroup::Appearance,
            PreferenceChange::ProfileVisibility(_)
            | PreferenceChange::ActivityStatus(_)
            | PreferenceChange::TaskProgress(_) => PreferenceGroup::Privacy,
        }
    }

    /// Parses the `(group, key, value)` triple sent by the settings form.
    pub fn parse(group: &str, key: &str, value: &str) -> Result<Self, SettingsError> {
        let group: PreferenceGroup = group
            .parse()
            .map_err(|_| SettingsError::UnknownGroup(group.to_string()))?;
        let unknown_key = || SettingsError::UnknownKey {
            group,
            key: key.to_string(),
        };
        let change = match group {
            PreferenceGroup::Notifications => {
                let key: NotificationKey = key.parse().map_err(|_| unknown_key())?;
                PreferenceChange::Notification(key, parse_value(value)?)
            }
            PreferenceGroup::Appearance => match key {
                "theme" => PreferenceChange::Theme(parse_value(value)?),
                "language" => PreferenceChange::Language(parse_value(value)?),
                "timezone" => PreferenceChange::Timezone(parse_value(value)?),
                _ => return Err(unknown_key()),
            },
            PreferenceGroup::Privacy => match key {
                "profileVisibility" => PreferenceChange::ProfileVisibility(parse_value(value)?),
                "activityStatus" => PreferenceChange::ActivityStatus(parse_value(value)?),
                "taskProgress" => PreferenceChange::TaskProgress(parse_value(value)?),
                _ => return Err(unknown_key()),
            },
        };
        Ok(change)
    }
}

fn parse_value<T: FromStr>(value: &str) -> Result<T, SettingsError> {
    value
        .parse()
        .map_err(|_| SettingsError::InvalidValue(value.to_string()))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Unknown preference group '{0}'")]
    UnknownGroup(String),
    #[error("Unknown preference '{key}' in {group:?}")]
    UnknownKey { group: PreferenceGroup, key: String },
    #[error("Invalid preference value '{0}'")]
    InvalidValue(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    pub notifications: Notifications,
    pub appearance: Appearance,
    pub privacy: Privacy,
}

impl Settings {
    /// Replaces one preference and acknowledges it.
    pub fn apply(&mut self, change: PreferenceChange) -> Notice {
        debug!(group = change.group().as_str(), ?change, "applying preference");
        match change {
            PreferenceChange::Notification(key, enabled) => {
                *self.notifications.slot(key) = enabled;
            }
            PreferenceChange::Theme(theme) => self.appearance.theme = theme,
            PreferenceChange::Language(language) => self.appearance.language = language,
            PreferenceChange::Timezone(timezone) => self.appearance.timezone = timezone,
            PreferenceChange::ProfileVisibility(visibility) => {
                self.privacy.profile_visibility = visibility;
            }
            PreferenceChange::ActivityStatus(on) => self.privacy.activity_status = on,
            PreferenceChange::TaskProgress(on) => self.privacy.task_progress = on,
        }
        Notice::new("Settings updated", "Your preferences have been saved.")
    }

    /// String form of [`Settings::apply`]. Leaves settings untouched on error.
    pub fn set_preference(
        &mut self,
        group: &str,
        key: &str,
        value: &str,
    ) -> Result<Notice, SettingsError> {
        let change = PreferenceChange::parse(group, key, value)?;
        Ok(self.apply(change))
    }

    /// Records the request and acknowledges it. Nothing is deleted.
    pub fn request_account_deletion(&self) -> Notice {
        info!("account deletion requested");
        Notice::destructive(
            "Account deletion requested",
            "We'll process your request within 24 hours.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::Severity;

    #[test]
    fn defaults_match_settings_page() {
        let settings = Settings::default();

        assert!(settings.notifications.email);
        assert!(settings.notifications.push);
        assert!(settings.notifications.task_updates);
        assert!(settings.notifications.project_messages);
        assert!(!settings.notifications.weekly_digest);
        assert!(!settings.notifications.marketing);
        assert_eq!(settings.appearance.theme, Theme::System);
        assert_eq!(settings.appearance.language, Language::English);
        assert_eq!(settings.appearance.timezone, Timezone::LosAngeles);
        assert_eq!(settings.privacy.profile_visibility, Visibility::Team);
        assert!(settings.privacy.activity_status);
        assert!(settings.privacy.task_progress);
    }

    #[test]
    fn apply_replaces_single_leaf() {
        let mut settings = Settings::default();

        let notice = settings.apply(PreferenceChange::Notification(
            NotificationKey::WeeklyDigest,
            true,
        ));

        assert_eq!(notice.title, "Settings updated");
        assert!(settings.notifications.weekly_digest);
        assert_eq!(settings.appearance, Appearance::default());
        assert_eq!(settings.privacy, Privacy::default());
        assert!(!settings.notifications.marketing);
    }

    #[test]
    fn each_notification_key_flips_only_its_own_switch() {
        for key in NotificationKey::ALL.iter().copied() {
            let defaults = Settings::default();
            let mut settings = defaults;

            settings.apply(PreferenceChange::Notification(
                key,
                !defaults.notifications.get(key),
            ));

            for other in NotificationKey::ALL.iter().copied() {
                let flipped = settings.notifications.get(other) != defaults.notifications.get(other);
                assert_eq!(flipped, other == key, "{other:?} after changing {key:?}");
            }
            assert_eq!(settings.appearance, defaults.appearance);
            assert_eq!(settings.privacy, defaults.privacy);
        }
    }

    #[test]
    fn set_preference_parses_form_values() {
        let mut settings = Settings::default();

        settings.set_preference("appearance", "theme", "dark").unwrap();
        settings
            .set_preference("appearance", "timezone", "Asia/Tokyo")
            .unwrap();
        settings
            .set_preference("privacy", "profileVisibility", "private")
            .unwrap();
        settings
            .set_preference("notifications", "taskUpdates", "false")
            .unwrap();

        assert_eq!(settings.appearance.theme, Theme::Dark);
        assert_eq!(settings.appearance.timezone, Timezone::Tokyo);
        assert_eq!(settings.privacy.profile_visibility, Visibility::Private);
        assert!(!settings.notifications.task_updates);
    }

    #[test]
    fn set_preference_rejects_unknown_input_without_changes() {
        let mut settings = Settings::default();

        assert_eq!(
            settings.set_preference("billing", "plan", "pro"),
            Err(SettingsError::UnknownGroup("billing".to_string()))
        );
        assert_eq!(
            settings.set_preference("appearance", "fontSize", "12"),
            Err(SettingsError::UnknownKey {
                group: PreferenceGroup::Appearance,
                key: "fontSize".to_string()
            })
        );
        assert_eq!(
            settings.set_preference("appearance", "language", "xx"),
            Err(SettingsError::InvalidValue("xx".to_string()))
        );
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn change_reports_its_group() {
        assert_eq!(
            PreferenceChange::Theme(Theme::Dark).group(),
            PreferenceGroup::Appearance
        );
        assert_eq!(
            PreferenceChange::TaskProgress(false).group(),
            PreferenceGroup::Privacy
        );
        assert_eq!(
            PreferenceChange::Notification(NotificationKey::Push, false).group(),
            PreferenceGroup::Notifications
        );
    }

    #[test]
    fn account_deletion_is_destructive_notice_only() {
        let settings = Settings::default();

        let notice = settings.request_account_deletion();

        assert_eq!(notice.severity, Severity::Destructive);
        assert_eq!(notice.title, "Account deletion requested");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn options_round_trip_through_select_values() {
        for timezone in Timezone::ALL {
            assert_eq!(timezone.as_str().parse::<Timezone>(), Ok(*timezone));
        }
        assert_eq!(Visibility::Team.label(), "Team only");
        assert_eq!(Language::ALL.len(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_with_form_keys_and_values() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert_eq!(json["notifications"]["weeklyDigest"], false);
        assert_eq!(json["appearance"]["timezone"], "America/Los_Angeles");
        assert_eq!(json["privacy"]["profileVisibility"], "team");
    }
}
