//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two listeners stand in for two deployments. The host origin serves the
//! host bundle, proxies the backend prefixes and proxies `/navapp/*` to the
//! remote origin. The remote origin only serves the navigation-bar bundle,
//! with permissive CORS so the host page may `import()` it cross-origin.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::proxy::{Upstream, forward};

/// Path prefixes owned by the backend.
pub const API_PREFIXES: [&str; 3] = ["/auth", "/account", "/place"];
/// Host-side mount point of the remote origin.
pub const REMOTE_PREFIX: &str = "/navapp";

/// Host origin: backend proxy, remote proxy, then the SPA.
pub fn host_app(config: &GatewayConfig, client: reqwest::Client) -> Router {
    let api = Upstream::new(client.clone(), &config.api_origin, config.body_limit_bytes);
    let remote = Upstream::new(client, &config.remote_origin(), config.body_limit_bytes).strip_prefix(REMOTE_PREFIX);

    let mut router = Router::new().route("/healthz", get(healthz));
    for prefix in API_PREFIXES {
        router = router
            .route(prefix, any(forward).with_state(api.clone()))
            .route(&format!("{prefix}/{{*rest}}"), any(forward).with_state(api.clone()));
    }
    router = router
        .route(REMOTE_PREFIX, any(forward).with_state(remote.clone()))
        .route(&format!("{REMOTE_PREFIX}/{{*rest}}"), any(forward).with_state(remote));

    // Client-side routes (`/login`, `/mypage/edit`, ...) all resolve to the
    // app shell.
    let spa = ServeDir::new(&config.host_dist).fallback(ServeFile::new(config.host_dist.join("index.html")));

    router
        .fallback_service(spa)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Remote origin: the navigation-bar bundle as static files.
pub fn remote_app(config: &GatewayConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(&config.navbar_dist))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
