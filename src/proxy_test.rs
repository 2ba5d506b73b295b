use axum::http::HeaderValue;

use super::*;

fn upstream(origin: &str) -> Upstream {
    Upstream::new(reqwest::Client::new(), origin, 1024)
}

// =============================================================================
// url_for
// =============================================================================

#[test]
fn url_keeps_path_and_query() {
    let up = upstream("http://127.0.0.1:7777/");
    let uri: Uri = "/place/search?location=%EC%84%9C%EC%9A%B8&page=2".parse().unwrap();
    assert_eq!(
        up.url_for(&uri),
        "http://127.0.0.1:7777/place/search?location=%EC%84%9C%EC%9A%B8&page=2"
    );
}

#[test]
fn prefix_is_stripped_before_forwarding() {
    let up = upstream("http://127.0.0.1:5001").strip_prefix("/navapp");
    assert_eq!(up.url_for(&"/navapp/navbar.js".parse().unwrap()), "http://127.0.0.1:5001/navbar.js");
    assert_eq!(up.url_for(&"/navapp".parse().unwrap()), "http://127.0.0.1:5001/");
}

#[test]
fn prefix_only_matches_whole_segments() {
    let up = upstream("http://127.0.0.1:5001").strip_prefix("/navapp");
    assert_eq!(up.url_for(&"/navapps/x".parse().unwrap()), "http://127.0.0.1:5001/navapps/x");
}

// =============================================================================
// strip_hop_by_hop
// =============================================================================

#[test]
fn hop_by_hop_headers_are_removed() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:5000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, x-session-hint"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("x-session-hint", HeaderValue::from_static("1"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc123"));

    strip_hop_by_hop(&mut headers);

    assert_eq!(headers.len(), 1);
    assert_eq!(headers[header::AUTHORIZATION], "Bearer abc123");
}
