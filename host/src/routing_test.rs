use super::*;

#[test]
fn nav_bar_hidden_only_on_login() {
    assert!(!shows_nav_bar("/login"));
    assert!(!shows_nav_bar("/login/"));
    assert!(shows_nav_bar("/"));
    assert!(shows_nav_bar("/signup"));
    assert!(shows_nav_bar("/login-help"));
}

#[test]
fn mypage_tree_requires_login() {
    assert!(requires_login("/mypage"));
    assert!(requires_login("/mypage/"));
    assert!(requires_login("/mypage/edit"));
    assert!(!requires_login("/mypages"));
    assert!(!requires_login("/domestic"));
}

#[test]
fn guest_is_sent_to_login() {
    assert_eq!(redirect_for("/mypage/delete", false), Some(LOGIN_PATH));
    assert_eq!(redirect_for("/mypage/delete", true), None);
    assert_eq!(redirect_for("/support", false), None);
}
