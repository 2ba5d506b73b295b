//! Session data model.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Denormalised profile snapshot kept next to the token for display.
///
/// Both sign-in paths write this blob with slightly different spellings
/// (`nickname` from the OAuth popup, `nickName` from password sign-up), so the
/// alias is accepted on read. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, alias = "nickName", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl User {
    /// Best label for the navigation bar: nickname, then name, then email.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        [&self.nickname, &self.name, &self.email]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// A reader's view of the shared session.
///
/// The token is authoritative: [`Session::new`] drops the user whenever the
/// token is absent or empty, so a half-cleared store reads as logged-out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(token: Option<String>, user: Option<User>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = if token.is_some() { user } else { None };
        Self { token, user }
    }

    /// The logged-out session.
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        if !self.is_logged_in() {
            return None;
        }
        self.user.as_ref().and_then(User::display_name)
    }
}

/// Transitional state of a first-time OAuth user who still has to complete
/// sign-up. Never counts as logged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSignup {
    pub temporary_token: String,
    pub user: Option<User>,
}
