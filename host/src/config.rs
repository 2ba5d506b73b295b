//! Build-time configuration.
//!
//! Values are baked in with `option_env!` when the bundle is compiled, the
//! same way the bundler inlined `import.meta.env` values before. Every key
//! has a default that matches the local dev gateway.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:7777";
pub const DEFAULT_KAKAO_START_PATH: &str = "/account/kakao-authentication/start";
pub const DEFAULT_ACCOUNT_API_BASE: &str = "/account";
pub const DEFAULT_PLACE_API_BASE: &str = "http://localhost:7777";
pub const DEFAULT_REMOTE_ENTRY: &str = "http://localhost:5001/navbar.js";
pub const DEFAULT_REMOTE_TIMEOUT_MS: u32 = 8000;

/// Origin the login popup posts its result from.
#[must_use]
pub fn api_origin() -> &'static str {
    non_empty(option_env!("PLACEDATA_API_ORIGIN")).unwrap_or(DEFAULT_API_ORIGIN)
}

/// URL the login popup is opened on.
///
/// Relative by default, so the popup starts on the host origin and reaches
/// the backend through the `/account` proxy. Its final page is served by the
/// backend itself and posts from [`api_origin`].
#[must_use]
pub fn kakao_start_url() -> &'static str {
    start_url(option_env!("PLACEDATA_KAKAO_START_PATH"))
}

pub(crate) fn start_url(raw: Option<&'static str>) -> &'static str {
    non_empty(raw).unwrap_or(DEFAULT_KAKAO_START_PATH)
}

#[must_use]
pub fn account_api_base() -> &'static str {
    non_empty(option_env!("PLACEDATA_ACCOUNT_API_BASE")).unwrap_or(DEFAULT_ACCOUNT_API_BASE)
}

#[must_use]
pub fn place_api_base() -> &'static str {
    non_empty(option_env!("PLACEDATA_PLACE_API_BASE")).unwrap_or(DEFAULT_PLACE_API_BASE)
}

/// JS entry of the navigation-bar remote.
#[must_use]
pub fn remote_entry() -> &'static str {
    non_empty(option_env!("PLACEDATA_REMOTE_ENTRY")).unwrap_or(DEFAULT_REMOTE_ENTRY)
}

#[must_use]
pub fn remote_timeout_ms() -> u32 {
    parse_timeout_ms(option_env!("PLACEDATA_REMOTE_TIMEOUT_MS"))
}

fn non_empty(raw: Option<&'static str>) -> Option<&'static str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a timeout override; zero and garbage fall back to the default.
pub(crate) fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REMOTE_TIMEOUT_MS)
}

/// Join an origin and a path without doubling or dropping the `/`.
pub(crate) fn join_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'))
}
