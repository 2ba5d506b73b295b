use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_camel_case_nickname() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.kr","nickName":"walker","id":7}"#)
        .expect("user json");
    assert_eq!(user.nickname.as_deref(), Some("walker"));
    assert_eq!(user.email.as_deref(), Some("a@b.kr"));
}

#[test]
fn user_serialises_without_absent_fields() {
    let user = User { name: Some("Kim".to_owned()), ..User::default() };
    assert_eq!(serde_json::to_string(&user).expect("encode"), r#"{"name":"Kim"}"#);
}

#[test]
fn display_name_prefers_nickname_then_name_then_email() {
    let mut user = User {
        name: Some("Kim".to_owned()),
        email: Some("kim@example.com".to_owned()),
        nickname: Some("traveller".to_owned()),
    };
    assert_eq!(user.display_name(), Some("traveller"));

    user.nickname = Some("   ".to_owned());
    assert_eq!(user.display_name(), Some("Kim"));

    user.name = None;
    assert_eq!(user.display_name(), Some("kim@example.com"));
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_without_token_drops_user() {
    let session = Session::new(None, Some(User { name: Some("Kim".to_owned()), ..User::default() }));
    assert_eq!(session, Session::guest());
    assert!(!session.is_logged_in());
}

#[test]
fn session_with_empty_token_is_guest() {
    let session = Session::new(Some(String::new()), None);
    assert!(session.token.is_none());
    assert!(!session.is_logged_in());
}

#[test]
fn session_display_name_requires_login() {
    let user = User { name: Some("Kim".to_owned()), ..User::default() };
    let session = Session::new(Some("abc123".to_owned()), Some(user.clone()));
    assert_eq!(session.display_name(), Some("Kim"));

    let forged = Session { token: None, user: Some(user) };
    assert_eq!(forged.display_name(), None);
}
