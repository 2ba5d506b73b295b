use super::*;

// =============================================================
// parse_timeout_ms
// =============================================================

#[test]
fn timeout_defaults_when_unset() {
    assert_eq!(parse_timeout_ms(None), DEFAULT_REMOTE_TIMEOUT_MS);
}

#[test]
fn timeout_accepts_positive_override() {
    assert_eq!(parse_timeout_ms(Some(" 2500 ")), 2500);
}

#[test]
fn timeout_rejects_zero_and_garbage() {
    assert_eq!(parse_timeout_ms(Some("0")), DEFAULT_REMOTE_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(Some("soon")), DEFAULT_REMOTE_TIMEOUT_MS);
    assert_eq!(parse_timeout_ms(Some("-5")), DEFAULT_REMOTE_TIMEOUT_MS);
}

// =============================================================
// join_url
// =============================================================

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(
        join_url("http://127.0.0.1:7777/", "/account/kakao-authentication/start"),
        "http://127.0.0.1:7777/account/kakao-authentication/start"
    );
    assert_eq!(join_url("http://a", "b"), "http://a/b");
}

#[test]
fn join_url_keeps_absolute_path() {
    assert_eq!(join_url("http://a", "https://b/start"), "https://b/start");
}

#[test]
fn defaults_match_dev_gateway() {
    assert_eq!(DEFAULT_API_ORIGIN, "http://127.0.0.1:7777");
    assert_eq!(DEFAULT_REMOTE_ENTRY, "http://localhost:5001/navbar.js");
    assert_eq!(DEFAULT_REMOTE_TIMEOUT_MS, 8000);
}

// =============================================================
// start_url
// =============================================================

#[test]
fn popup_starts_on_host_origin_by_default() {
    assert_eq!(start_url(None), "/account/kakao-authentication/start");
    assert_eq!(start_url(Some("  ")), "/account/kakao-authentication/start");
    assert!(!kakao_start_url().is_empty());
}

#[test]
fn start_url_override_is_used_verbatim() {
    assert_eq!(start_url(Some("https://api.placedata.test/oauth/start")), "https://api.placedata.test/oauth/start");
}
