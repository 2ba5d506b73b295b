//! Gateway failures surfaced to the browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The upstream could not be reached or its response not read.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The incoming request body could not be buffered.
    #[error("request body rejected: {0}")]
    Body(#[from] axum::Error),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}
