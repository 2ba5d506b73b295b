//! Gateway configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_HOST_PORT: u16 = 5000;
pub const DEFAULT_REMOTE_PORT: u16 = 5001;
pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:7777";
pub const DEFAULT_HOST_DIST: &str = "host/dist";
pub const DEFAULT_NAVBAR_DIST: &str = "navbar/dist";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },

    #[error("HOST_PORT and REMOTE_PORT must differ (both are {0})")]
    SamePort(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind: IpAddr,
    pub host_port: u16,
    pub remote_port: u16,
    pub api_origin: String,
    pub host_dist: PathBuf,
    pub navbar_dist: PathBuf,
    pub upstream_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR,
            host_port: DEFAULT_HOST_PORT,
            remote_port: DEFAULT_REMOTE_PORT,
            api_origin: DEFAULT_API_ORIGIN.to_owned(),
            host_dist: PathBuf::from(DEFAULT_HOST_DIST),
            navbar_dist: PathBuf::from(DEFAULT_NAVBAR_DIST),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl GatewayConfig {
    /// Build typed config from the process environment.
    ///
    /// All optional:
    /// - `BIND_ADDR`: default `127.0.0.1`
    /// - `HOST_PORT`: host app origin, default 5000
    /// - `REMOTE_PORT`: navigation-bar origin, default 5001
    /// - `API_ORIGIN`: backend for `/auth`, `/account`, `/place`
    /// - `HOST_DIST`, `NAVBAR_DIST`: built bundle directories
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `BODY_LIMIT_BYTES`: largest proxied request body, default 10 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is present but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let bind = parse_or("BIND_ADDR", get("BIND_ADDR"), defaults.bind, "expected an IP address")?;
        let host_port = parse_port("HOST_PORT", get("HOST_PORT"), defaults.host_port)?;
        let remote_port = parse_port("REMOTE_PORT", get("REMOTE_PORT"), defaults.remote_port)?;
        if host_port == remote_port {
            return Err(ConfigError::SamePort(host_port));
        }

        let api_origin = match get("API_ORIGIN") {
            Some(raw) => parse_origin("API_ORIGIN", &raw)?,
            None => defaults.api_origin,
        };

        Ok(Self {
            bind,
            host_port,
            remote_port,
            api_origin,
            host_dist: get("HOST_DIST").map_or(defaults.host_dist, PathBuf::from),
            navbar_dist: get("NAVBAR_DIST").map_or(defaults.navbar_dist, PathBuf::from),
            upstream_timeout_secs: parse_or(
                "UPSTREAM_TIMEOUT_SECS",
                get("UPSTREAM_TIMEOUT_SECS"),
                defaults.upstream_timeout_secs,
                "expected whole seconds",
            )?,
            body_limit_bytes: parse_or(
                "BODY_LIMIT_BYTES",
                get("BODY_LIMIT_BYTES"),
                defaults.body_limit_bytes,
                "expected a byte count",
            )?,
        })
    }

    #[must_use]
    pub fn host_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.host_port)
    }

    #[must_use]
    pub fn remote_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.remote_port)
    }

    /// Origin the host uses to reach the remote listener, for `/navapp`.
    #[must_use]
    pub fn remote_origin(&self) -> String {
        let ip = if self.bind.is_unspecified() { DEFAULT_BIND_ADDR } else { self.bind };
        format!("http://{}", SocketAddr::new(ip, self.remote_port))
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
    reason: &'static str,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value, reason }),
    }
}

fn parse_port(var: &'static str, raw: Option<String>, default: u16) -> Result<u16, ConfigError> {
    let port = parse_or(var, raw, default, "expected a port number")?;
    if port == 0 {
        return Err(ConfigError::Invalid { var, value: "0".to_owned(), reason: "port 0 is not allowed" });
    }
    Ok(port)
}

fn parse_origin(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim_end_matches('/');
    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::Invalid {
            var,
            value: raw.to_owned(),
            reason: "expected an http:// or https:// origin",
        })?;
    if rest.is_empty() || rest.contains('/') {
        return Err(ConfigError::Invalid { var, value: raw.to_owned(), reason: "expected scheme and host only" });
    }
    Ok(origin.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
