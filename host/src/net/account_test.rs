use super::*;

// =============================================================
// LoginResponse::into_token
// =============================================================

fn response(json: &str) -> LoginResponse {
    serde_json::from_str(json).expect("decode")
}

#[test]
fn token_field_wins() {
    let token = response(r#"{"token":"a","accessToken":"b"}"#).into_token();
    assert_eq!(token, Ok("a".to_owned()));
}

#[test]
fn access_token_and_user_token_are_accepted() {
    assert_eq!(response(r#"{"accessToken":"b"}"#).into_token(), Ok("b".to_owned()));
    assert_eq!(response(r#"{"userToken":"c"}"#).into_token(), Ok("c".to_owned()));
}

#[test]
fn empty_token_falls_through_to_next_spelling() {
    let token = response(r#"{"token":"","userToken":"c"}"#).into_token();
    assert_eq!(token, Ok("c".to_owned()));
}

#[test]
fn missing_token_reports_server_message() {
    let err = response(r#"{"message":"비밀번호 오류"}"#).into_token().expect_err("no token");
    assert_eq!(err, ApiError::MissingToken("비밀번호 오류".to_owned()));
}

#[test]
fn missing_token_without_message_uses_default() {
    let err = LoginResponse::default().into_token().expect_err("no token");
    assert_eq!(err, ApiError::MissingToken(NO_TOKEN_MESSAGE.to_owned()));
}

// =============================================================
// Profile / requests
// =============================================================

#[test]
fn profile_maps_nick_name_to_user_nickname() {
    let profile: Profile =
        serde_json::from_str(r#"{"id":7,"email":"kim@example.com","nickName":"wanderer","loginType":"EMAIL"}"#)
            .expect("decode");
    let user = profile.to_user();
    assert_eq!(user.nickname.as_deref(), Some("wanderer"));
    assert_eq!(user.display_name(), Some("wanderer"));
}

#[test]
fn register_request_uses_camel_case() {
    let req = RegisterRequest {
        email: "kim@example.com".to_owned(),
        password: "secret1".to_owned(),
        nick_name: "kim".to_owned(),
    };
    let json = serde_json::to_value(&req).expect("encode");
    assert_eq!(json["nickName"], "kim");
}

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("login"), format!("{}/login", crate::config::account_api_base()));
}
