//! Reverse proxy for backend and remote-bundle paths.
//!
//! Requests are buffered and replayed with `reqwest`. The upstream's own
//! `Host` is used (reqwest derives it from the URL), redirects are passed
//! back to the browser untouched, and hop-by-hop headers are dropped in both
//! directions.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap};
use axum::http::Uri;
use axum::response::Response;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

static HOP_BY_HOP: [header::HeaderName; 8] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
    header::HOST,
];

/// Shared HTTP client for every upstream.
///
/// # Errors
///
/// Returns the builder error if the TLS backend cannot be initialised.
pub fn client(config: &GatewayConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
}

/// One proxied origin, optionally mounted under a path prefix that is
/// removed before forwarding.
#[derive(Clone, Debug)]
pub struct Upstream {
    client: reqwest::Client,
    origin: Arc<str>,
    strip_prefix: Option<&'static str>,
    body_limit: usize,
}

impl Upstream {
    pub fn new(client: reqwest::Client, origin: &str, body_limit: usize) -> Self {
        Self {
            client,
            origin: Arc::from(origin.trim_end_matches('/')),
            strip_prefix: None,
            body_limit,
        }
    }

    #[must_use]
    pub fn strip_prefix(mut self, prefix: &'static str) -> Self {
        self.strip_prefix = Some(prefix);
        self
    }

    /// Upstream URL for an incoming request URI.
    #[must_use]
    pub fn url_for(&self, uri: &Uri) -> String {
        let mut path = uri.path();
        if let Some(prefix) = self.strip_prefix {
            if let Some(rest) = path.strip_prefix(prefix).filter(|r| r.is_empty() || r.starts_with('/')) {
                path = rest;
            }
        }
        let path = if path.is_empty() { "/" } else { path };
        match uri.query() {
            Some(query) => format!("{}{path}?{query}", self.origin),
            None => format!("{}{path}", self.origin),
        }
    }
}

/// Remove connection-scoped headers, including any named by `Connection`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let named: Vec<header::HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| header::HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();
    for name in HOP_BY_HOP.iter().chain(&named) {
        headers.remove(name);
    }
    headers.remove("keep-alive");
}

pub async fn forward(State(upstream): State<Upstream>, req: Request) -> Result<Response, GatewayError> {
    let url = upstream.url_for(req.uri());
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, upstream.body_limit).await?;

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(header::CONTENT_LENGTH);

    let upstream_resp = upstream
        .client
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream_resp.status();
    let mut headers = upstream_resp.headers().clone();
    strip_hop_by_hop(&mut headers);
    let bytes = upstream_resp.bytes().await?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "proxied");

    let mut resp = Response::new(Body::from(bytes));
    *resp.status_mut() = status;
    *resp.headers_mut() = headers;
    Ok(resp)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
