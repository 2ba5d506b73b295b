//! Route-level rules shared by the app shell and its pages.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const MYPAGE_PATH: &str = "/mypage";
pub const MYPAGE_PROFILE_PATH: &str = "/mypage/profile";

/// Drop trailing slashes, keeping the root as `/`.
fn normalise(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// The navigation bar is hidden on the login page only.
#[must_use]
pub fn shows_nav_bar(path: &str) -> bool {
    normalise(path) != LOGIN_PATH
}

/// `/mypage` and everything below it need a session.
#[must_use]
pub fn requires_login(path: &str) -> bool {
    let path = normalise(path);
    path == MYPAGE_PATH || path.starts_with("/mypage/")
}

/// Where a visitor to `path` must be sent instead, if anywhere.
#[must_use]
pub fn redirect_for(path: &str, logged_in: bool) -> Option<&'static str> {
    (requires_login(path) && !logged_in).then_some(LOGIN_PATH)
}
