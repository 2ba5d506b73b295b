use session::User;

use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_guest() {
    let state = AuthState::default();
    assert!(!state.is_logged_in());
    assert!(state.token().is_none());
}

#[test]
fn greeting_prefers_nickname() {
    let state = AuthState::from(Session::new(
        Some("abc123".to_owned()),
        Some(User {
            name: Some("Kim".to_owned()),
            nickname: Some("wanderer".to_owned()),
            ..User::default()
        }),
    ));
    assert_eq!(state.greeting_name(), "wanderer");
}

#[test]
fn greeting_without_profile_is_generic() {
    let state = AuthState::from(Session::new(Some("abc123".to_owned()), None));
    assert_eq!(state.greeting_name(), "회원");
}

#[test]
fn nav_props_mirror_the_session() {
    let state = AuthState::from(Session::new(Some("abc123".to_owned()), None));
    assert_eq!(state.nav_props().token.as_deref(), Some("abc123"));
}
