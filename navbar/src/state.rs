//! What the bar renders from: the session it was handed and the current path.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use session::{NavBarProps, Session};

use crate::tabs::{MAIN_TABS, MYPAGE_TABS, Tab};

const MYPAGE_ROOT: &str = "/mypage";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub session: Session,
    pub path: String,
}

impl NavState {
    #[must_use]
    pub fn new(session: Session, path: impl Into<String>) -> Self {
        Self { session, path: path.into() }
    }

    #[must_use]
    pub fn from_props(props: &NavBarProps, path: impl Into<String>) -> Self {
        Self::new(props.session(), path)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// `"{name}님"` for a logged-in user with a usable name.
    #[must_use]
    pub fn greeting(&self) -> Option<String> {
        self.session.display_name().map(|name| format!("{name}님"))
    }

    /// Section tabs swap to account tabs only for a logged-in user inside
    /// the my-page area.
    #[must_use]
    pub fn shows_mypage_tabs(&self) -> bool {
        self.is_logged_in()
            && (self.path == MYPAGE_ROOT
                || self.path.strip_prefix(MYPAGE_ROOT).is_some_and(|rest| rest.starts_with('/')))
    }

    #[must_use]
    pub fn tabs(&self) -> &'static [Tab] {
        if self.shows_mypage_tabs() { &MYPAGE_TABS } else { &MAIN_TABS }
    }
}
