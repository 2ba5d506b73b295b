//! Local gateway for the Place Data micro-frontends.

mod config;
mod error;
mod proxy;
mod routes;

use std::future::IntoFuture;

use tracing_subscriber::EnvFilter;

use crate::config::GatewayConfig;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment alone is enough.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("placedata=info,tower_http=info")))
        .init();

    let config = GatewayConfig::from_env().expect("invalid gateway configuration");
    let client = proxy::client(&config).expect("failed to build HTTP client");

    let host = tokio::net::TcpListener::bind(config.host_addr())
        .await
        .expect("failed to bind host port");
    let remote = tokio::net::TcpListener::bind(config.remote_addr())
        .await
        .expect("failed to bind remote port");

    tracing::info!(
        host = %config.host_addr(),
        remote = %config.remote_addr(),
        api = %config.api_origin,
        "placedata gateway listening"
    );

    let host_server = axum::serve(host, routes::host_app(&config, client)).into_future();
    let remote_server = axum::serve(remote, routes::remote_app(&config)).into_future();
    tokio::try_join!(host_server, remote_server).expect("server failed");
}
