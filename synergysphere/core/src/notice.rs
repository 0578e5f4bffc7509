#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How loudly a notice should be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// Ephemeral user feedback produced by an operation, rendered as a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notice {
            severity: Severity::Destructive,
            ..Notice::new(title, description)
        }
    }

    pub fn logged_out() -> Self {
        Notice::new("Logged out", "You have been successfully logged out.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notice_has_default_severity() {
        let notice = Notice::new("Title", "Body");

        assert_eq!(notice.severity, Severity::Default);
        assert_eq!(notice.title, "Title");
        assert_eq!(notice.description, "Body");
    }

    #[test]
    fn destructive_notice_keeps_texts() {
        let notice = Notice::destructive("Danger", "Careful");

        assert_eq!(notice.severity, Severity::Destructive);
        assert_eq!(notice.title, "Danger");
    }

    #[test]
    fn logged_out_is_a_plain_notice() {
        let notice = Notice::logged_out();

        assert_eq!(notice.title, "Logged out");
        assert_eq!(notice.severity, Severity::Default);
    }
}
