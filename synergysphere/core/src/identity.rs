//! The signed-in identity shared by every page.
//!
//! The app root owns a single [`AuthContext`] and hands it to pages; pages
//! only read it, except for logout.

use crate::id::RecordId;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The authenticated user as seen by the pages.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrentUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

impl CurrentUser {
    /// The demo identity signed in by the login page.
    pub fn demo() -> Self {
        CurrentUser {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@company.com".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                    .to_string(),
            ),
        }
    }

    /// First word of the display name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

/// Lifecycle of the authentication identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum Session {
    #[default]
    SignedOut,
    SignedIn(CurrentUser),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuthContext {
    session: Session,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signs `user` in, replacing any previous identity.
    pub fn login(&mut self, user: CurrentUser) {
        info!(user_id = %user.id, "signed in");
        self.session = Session::SignedIn(user);
    }

    /// Clears the identity and returns whoever was signed in.
    pub fn logout(&mut self) -> Option<CurrentUser> {
        match std::mem::take(&mut self.session) {
            Session::SignedIn(user) => {
                info!(user_id = %user.id, "signed out");
                Some(user)
            }
            Session::SignedOut => None,
        }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match &self.session {
            Session::SignedIn(user) => Some(user),
            Session::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.session, Session::SignedIn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_signed_out() {
        let auth = AuthContext::new();

        assert!(!auth.is_signed_in());
        assert_eq!(auth.current_user(), None);
        assert_eq!(auth.session, Session::SignedOut);
    }

    #[test]
    fn login_then_logout_round_trips_the_user() {
        let mut auth = AuthContext::new();

        auth.login(CurrentUser::demo());
        assert!(auth.is_signed_in());
        assert_eq!(auth.current_user().unwrap().name, "John Doe");

        let previous = auth.logout();

        assert_eq!(previous, Some(CurrentUser::demo()));
        assert!(!auth.is_signed_in());
    }

    #[test]
    fn logout_when_signed_out_returns_none() {
        let mut auth = AuthContext::new();

        assert_eq!(auth.logout(), None);
    }

    #[test]
    fn first_name_is_first_word() {
        let user = CurrentUser::demo();

        assert_eq!(user.first_name(), "John");
    }
}
