use std::path::Path;

use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{Method, header};
use axum::response::Response;
use tower::ServiceExt;

use super::*;

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn config_for(host: &Path, navbar: &Path) -> GatewayConfig {
    GatewayConfig {
        host_dist: host.to_path_buf(),
        navbar_dist: navbar.to_path_buf(),
        ..GatewayConfig::default()
    }
}

async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Echo server standing in for an upstream: replies with method, path and
/// query, plus the request body.
async fn spawn_echo() -> u16 {
    let app = Router::new().fallback(|req: Request| async move {
        let line = format!("{} {}", req.method(), req.uri());
        let body = to_bytes(req.into_body(), usize::MAX).await.unwrap();
        format!("{line}\n{}", String::from_utf8_lossy(&body))
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    port
}

// =============================================================================
// static serving
// =============================================================================

#[tokio::test]
async fn healthz_ok_on_both_origins() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(dir.path(), dir.path());

    let host = host_app(&cfg, reqwest::Client::new());
    let resp = host.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let remote = remote_app(&cfg);
    let resp = remote.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_host_path_falls_back_to_index() {
    let host_dir = tempfile::tempdir().unwrap();
    let nav_dir = tempfile::tempdir().unwrap();
    write(host_dir.path(), "index.html", "<html>shell</html>");

    let app = host_app(&config_for(host_dir.path(), nav_dir.path()), reqwest::Client::new());
    let resp = app.oneshot(Request::get("/mypage/edit").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "<html>shell</html>");
}

#[tokio::test]
async fn remote_serves_bundle_with_cors() {
    let host_dir = tempfile::tempdir().unwrap();
    let nav_dir = tempfile::tempdir().unwrap();
    write(nav_dir.path(), "navbar.js", "export default function init() {}");

    let app = remote_app(&config_for(host_dir.path(), nav_dir.path()));
    let req = Request::get("/navbar.js")
        .header(header::ORIGIN, "http://localhost:5000")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn remote_has_no_spa_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let app = remote_app(&config_for(dir.path(), dir.path()));
    let resp = app.oneshot(Request::get("/login").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// proxying
// =============================================================================

#[tokio::test]
async fn api_prefixes_are_forwarded_verbatim() {
    let port = spawn_echo().await;
    let dir = tempfile::tempdir().unwrap();
    let cfg = GatewayConfig { api_origin: format!("http://127.0.0.1:{port}"), ..config_for(dir.path(), dir.path()) };
    let app = host_app(&cfg, reqwest::Client::new());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/account/login?next=%2F")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":"kim@example.com"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "POST /account/login?next=%2F\n{\"email\":\"kim@example.com\"}");

    let resp = app.oneshot(Request::get("/place").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(body_text(resp).await, "GET /place\n");
}

#[tokio::test]
async fn navapp_is_forwarded_without_prefix() {
    let port = spawn_echo().await;
    let dir = tempfile::tempdir().unwrap();
    let cfg = GatewayConfig { remote_port: port, ..config_for(dir.path(), dir.path()) };
    let app = host_app(&cfg, reqwest::Client::new());

    let resp = app.oneshot(Request::get("/navapp/navbar.js").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(body_text(resp).await, "GET /navbar.js\n");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let dir = tempfile::tempdir().unwrap();
    let cfg = GatewayConfig { api_origin: format!("http://127.0.0.1:{port}"), ..config_for(dir.path(), dir.path()) };
    let app = host_app(&cfg, reqwest::Client::new());

    let resp = app.oneshot(Request::get("/auth/me").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}
