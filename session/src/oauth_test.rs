use serde_json::json;

use super::*;
use crate::notify::LocalChannel;
use crate::storage::{KeyValueStorage, MemoryStorage};

const BACKEND: &str = "http://127.0.0.1:7777";

fn bridge() -> (MemoryStorage, LocalChannel, OAuthBridge) {
    let storage = MemoryStorage::new();
    let channel = LocalChannel::new();
    let bridge = OAuthBridge::new(
        BACKEND,
        SessionStore::new(storage.clone()),
        Rc::new(channel.clone()),
    );
    (storage, channel, bridge)
}

// =============================================================
// PopupMessage decoding
// =============================================================

#[test]
fn existing_user_message_decodes() {
    let msg = PopupMessage::from_value(&json!({
        "userToken": "tok-1",
        "user": {"name": "Kim", "email": "kim@example.com"}
    }))
    .expect("decode");

    assert_eq!(
        msg,
        PopupMessage::Existing {
            user_token: "tok-1".to_owned(),
            user: Some(User {
                name: Some("Kim".to_owned()),
                email: Some("kim@example.com".to_owned()),
                nickname: None,
            }),
        }
    );
}

#[test]
fn new_user_message_decodes() {
    let msg = PopupMessage::from_value(&json!({
        "newUser": true,
        "loginType": "KAKAO",
        "temporaryUserToken": "tmp-1",
        "user": {"name": "Lee"}
    }))
    .expect("decode");

    assert!(matches!(
        msg,
        PopupMessage::NewUser { ref temporary_token, ref login_type, .. }
            if temporary_token == "tmp-1" && login_type.as_deref() == Some("KAKAO")
    ));
}

#[test]
fn message_with_both_shapes_is_ambiguous() {
    let err = PopupMessage::from_value(&json!({
        "userToken": "tok-1",
        "newUser": true,
        "temporaryUserToken": "tmp-1"
    }))
    .expect_err("ambiguous");
    assert_eq!(err, MessageError::Ambiguous);
}

#[test]
fn new_user_without_temporary_token_is_malformed() {
    let err = PopupMessage::from_value(&json!({"newUser": true})).expect_err("malformed");
    assert_eq!(err, MessageError::Malformed("temporaryUserToken"));
}

#[test]
fn empty_or_non_string_token_is_malformed() {
    for token in [json!(""), json!(42), json!({"t": 1})] {
        let err = PopupMessage::from_value(&json!({"userToken": token})).expect_err("malformed");
        assert_eq!(err, MessageError::Malformed("userToken"));
    }
}

#[test]
fn unknown_shapes_are_rejected() {
    assert_eq!(
        PopupMessage::from_value(&json!({"hello": "world"})),
        Err(MessageError::Unrecognized)
    );
    assert_eq!(
        PopupMessage::from_value(&json!({"newUser": false, "temporaryUserToken": "x"})),
        Err(MessageError::Unrecognized)
    );
    assert_eq!(
        PopupMessage::from_value(&json!("userToken")),
        Err(MessageError::NotAnObject)
    );
}

#[test]
fn malformed_user_blob_is_rejected() {
    let err = PopupMessage::from_value(&json!({"userToken": "tok", "user": [1, 2]}))
        .expect_err("malformed user");
    assert_eq!(err, MessageError::Malformed("user"));
}

#[test]
fn missing_user_is_allowed() {
    let msg = PopupMessage::from_value(&json!({"userToken": "tok", "user": null})).expect("decode");
    assert_eq!(msg, PopupMessage::Existing { user_token: "tok".to_owned(), user: None });
}

// =============================================================
// OAuthBridge
// =============================================================

#[test]
fn spoofed_origin_is_ignored_without_write_or_announce() {
    let (storage, channel, bridge) = bridge();

    let outcome = bridge.handle(
        "http://evil.example",
        &json!({"userToken": "forged", "user": {"name": "Mallory"}}),
    );

    assert_eq!(outcome, PopupOutcome::Ignored);
    assert!(!outcome.closes_popup());
    assert!(storage.is_empty());
    assert!(channel.announced().is_empty());
}

#[test]
fn origin_match_is_exact() {
    let (_, _, bridge) = bridge();
    assert!(bridge.trusts("http://127.0.0.1:7777"));
    assert!(!bridge.trusts("http://127.0.0.1:7777.evil.example"));
    assert!(!bridge.trusts("https://127.0.0.1:7777"));
    assert!(!bridge.trusts("http://localhost:7777"));
}

#[test]
fn configured_origin_trailing_slash_is_dropped() {
    let bridge = OAuthBridge::new(
        "http://127.0.0.1:7777/",
        SessionStore::new(MemoryStorage::new()),
        Rc::new(LocalChannel::new()),
    );
    assert_eq!(bridge.expected_origin(), BACKEND);
}

#[test]
fn existing_user_message_logs_in_and_announces() {
    let (_, channel, bridge) = bridge();

    let outcome = bridge.handle(BACKEND, &json!({"userToken": "abc123", "user": {"name": "Kim"}}));

    let expected = Session::new(
        Some("abc123".to_owned()),
        Some(User { name: Some("Kim".to_owned()), ..User::default() }),
    );
    assert_eq!(outcome, PopupOutcome::LoggedIn(expected));
    assert!(outcome.closes_popup());
    assert_eq!(channel.announced(), vec![AuthChanged::new(ChangeReason::Login)]);
}

#[test]
fn new_user_message_records_pending_signup() {
    let (storage, channel, bridge) = bridge();

    let outcome = bridge.handle(
        BACKEND,
        &json!({"newUser": true, "temporaryUserToken": "tmp-1", "user": {"name": "Lee"}}),
    );

    assert!(matches!(outcome, PopupOutcome::SignupRequired(ref p) if p.temporary_token == "tmp-1"));
    assert_eq!(storage.get(crate::PENDING_TOKEN_KEY).as_deref(), Some("tmp-1"));
    assert!(storage.get(crate::TOKEN_KEY).is_none());
    assert_eq!(channel.announced(), vec![AuthChanged::new(ChangeReason::PendingSignup)]);
}

#[test]
fn trusted_but_unrecognised_message_is_rejected_quietly() {
    let (storage, channel, bridge) = bridge();

    let outcome = bridge.handle(BACKEND, &json!({"type": "ping"}));

    assert_eq!(outcome, PopupOutcome::Rejected(PopupError::Message(MessageError::Unrecognized)));
    assert!(outcome.closes_popup());
    assert!(storage.is_empty());
    assert!(channel.announced().is_empty());
}

#[test]
fn storage_failure_is_reported_and_not_announced() {
    let (storage, channel, bridge) = bridge();
    storage.set_read_only(true);

    let outcome = bridge.handle(BACKEND, &json!({"userToken": "abc123"}));

    assert!(matches!(outcome, PopupOutcome::Rejected(PopupError::Storage(_))));
    assert!(channel.announced().is_empty());
}

// =============================================================
// PopupGeometry
// =============================================================

#[test]
fn popup_is_centred_over_top_window() {
    let geometry = PopupGeometry::centered(1280.0, 800.0, 100.0, 50.0);
    assert_eq!(geometry, PopupGeometry { width: 460, height: 680, left: 510, top: 110 });
}

#[test]
fn popup_features_string_matches_window_open_format() {
    let geometry = PopupGeometry { width: 460, height: 680, left: 10, top: 20 };
    assert_eq!(
        geometry.features(),
        "width=460,height=680,left=10,top=20,resizable=no,scrollbars=yes"
    );
}

#[test]
fn new_user_popup_over_live_session_never_pairs_old_token_with_new_profile() {
    let (storage, _, bridge) = bridge();
    let store = SessionStore::new(storage.clone());
    store
        .write("tokA", Some(&User { name: Some("Kim".to_owned()), ..User::default() }))
        .expect("write");

    let outcome = bridge.handle(
        BACKEND,
        &json!({"newUser": true, "temporaryUserToken": "tmp-1", "user": {"name": "Lee"}}),
    );

    assert!(matches!(outcome, PopupOutcome::SignupRequired(_)));
    assert_eq!(store.read(), Session::guest());
    assert!(storage.get(crate::TOKEN_KEY).is_none());
}
