//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a key lookup function so the rules can be tested
//! without mutating the process environment. [`ServerConfig::from_env`] is the
//! only entry point that touches `std::env`.

use reqwest::Url;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE: &str = "__session";
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 3;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// A URL-valued variable could not be parsed.
    #[error("invalid URL in {var}: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
}

/// Settings for the upstream identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Endpoint that answers 2xx for a valid session cookie. `None` disables
    /// verification and every visitor is treated as signed out.
    pub session_url: Option<String>,
    /// Hosted sign-in page. `None` makes `/sign-in` answer 503.
    pub sign_in_url: Option<String>,
    /// Name of the provider's session cookie.
    pub session_cookie: String,
    /// Upper bound on one verification request.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Public origin of this site, without a trailing slash.
    pub public_url: String,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_URL`: default `http://localhost:<PORT>`
    /// - `AUTH_SESSION_URL`, `AUTH_SIGN_IN_URL`: provider endpoints
    /// - `AUTH_SESSION_COOKIE`: default `__session`
    /// - `AUTH_TIMEOUT_SECS`: default 3
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or any URL variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or any URL variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let public_url = match get("PUBLIC_URL") {
            Some(raw) => parse_url("PUBLIC_URL", &raw)?,
            None => format!("http://localhost:{port}"),
        }
        .trim_end_matches('/')
        .to_owned();

        let session_url = get("AUTH_SESSION_URL").map(|raw| parse_url("AUTH_SESSION_URL", &raw)).transpose()?;
        let sign_in_url = get("AUTH_SIGN_IN_URL").map(|raw| parse_url("AUTH_SIGN_IN_URL", &raw)).transpose()?;
        let session_cookie = get("AUTH_SESSION_COOKIE").unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_owned());
        let timeout_secs = get("AUTH_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_AUTH_TIMEOUT_SECS);

        Ok(Self { port, public_url, auth: AuthConfig { session_url, sign_in_url, session_cookie, timeout_secs } })
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    Url::parse(raw)
        .map(|_| raw.to_owned())
        .map_err(|e| ConfigError::InvalidUrl { var, reason: e.to_string() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
