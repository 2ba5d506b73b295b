//! REST client error type.

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    MissingToken(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Body text of a non-2xx reply, when there was one.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    /// Text to show inline: the server's own body when it sent one.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.body().map_or_else(|| self.to_string(), ToOwned::to_owned)
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        Self::Network(e.to_string())
    }
}

/// Turn a non-2xx response into [`ApiError::Status`].
#[cfg(feature = "csr")]
pub(crate) async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}
