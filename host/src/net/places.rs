//! Place search client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "places_test.rs"]
mod places_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PlaceItem {
    #[serde(default)]
    pub place_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /place/search` body. Blank filters are sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

fn blank_to_none(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}

impl SearchRequest {
    #[must_use]
    pub fn new(title: Option<&str>, category: Option<&str>, location: Option<&str>) -> Self {
        Self {
            title: blank_to_none(title),
            category: blank_to_none(category),
            location: blank_to_none(location),
        }
    }
}

/// Decode a list reply leniently: a non-array body is an empty list and
/// entries that do not decode are skipped.
pub(crate) fn decode_list(body: Value) -> Vec<PlaceItem> {
    let Value::Array(entries) = body else {
        log::warn!("place list reply is not an array");
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<PlaceItem>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("skipping undecodable place: {e}");
                None
            }
        })
        .collect()
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn endpoint(path: &str) -> String {
    crate::config::join_url(crate::config::place_api_base(), path)
}

/// `GET /place/list`.
///
/// # Errors
///
/// Network failures and non-2xx replies.
pub async fn list_places() -> Result<Vec<PlaceItem>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/place/list")).send().await?;
        let resp = super::error::check_status(resp).await?;
        let body = resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(decode_list(body))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /place/search`.
///
/// # Errors
///
/// Network failures and non-2xx replies.
pub async fn search_places(req: &SearchRequest) -> Result<Vec<PlaceItem>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/place/search")).json(req)?.send().await?;
        let resp = super::error::check_status(resp).await?;
        let body = resp.json::<Value>().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(decode_list(body))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}
