use session::User;

use super::*;

fn kim() -> Session {
    Session::new(
        Some("abc123".to_owned()),
        Some(User { name: Some("Kim".to_owned()), ..User::default() }),
    )
}

#[test]
fn guest_has_no_greeting_and_main_tabs() {
    let state = NavState::new(Session::guest(), "/mypage/profile");
    assert!(!state.is_logged_in());
    assert_eq!(state.greeting(), None);
    assert!(!state.shows_mypage_tabs());
    assert_eq!(state.tabs(), &MAIN_TABS);
}

#[test]
fn logged_in_user_is_greeted_by_name() {
    let state = NavState::new(kim(), "/");
    assert_eq!(state.greeting().as_deref(), Some("Kim님"));
}

#[test]
fn logged_in_without_name_has_no_greeting() {
    let state = NavState::new(Session::new(Some("t".to_owned()), None), "/");
    assert!(state.is_logged_in());
    assert_eq!(state.greeting(), None);
}

#[test]
fn mypage_area_swaps_to_account_tabs() {
    for path in ["/mypage", "/mypage/", "/mypage/edit", "/mypage/delete"] {
        let state = NavState::new(kim(), path);
        assert!(state.shows_mypage_tabs(), "{path}");
        assert_eq!(state.tabs(), &MYPAGE_TABS);
    }
    assert!(!NavState::new(kim(), "/mypages").shows_mypage_tabs());
}

#[test]
fn props_without_token_render_as_guest() {
    let props = NavBarProps { token: None, user: kim().user };
    let state = NavState::from_props(&props, "/");
    assert!(!state.is_logged_in());
    assert_eq!(state.greeting(), None);
}
