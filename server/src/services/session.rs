//! Session verification against the upstream identity provider.
//!
//! ARCHITECTURE
//! ============
//! The site never owns credentials. It forwards the provider's session cookie
//! to a configured verification endpoint and reduces the answer to a single
//! "signed in" flag for the landing page.
//!
//! ERROR HANDLING
//! ==============
//! Verification failures are logged and reported as signed out. Offering
//! sign-in again is always a usable fallback; a broken page is not.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::COOKIE;

use crate::config::AuthConfig;

/// Errors produced while talking to the identity provider.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The verification request could not be completed.
    #[error("session request failed: {0}")]
    Request(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Answers whether a session token belongs to a signed-in visitor.
#[async_trait::async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Verify one session token.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the provider could not be reached.
    async fn verify(&self, token: &str) -> Result<bool, SessionError>;
}

/// Verifier used when no provider is configured: nobody is signed in.
pub struct SignedOutVerifier;

#[async_trait::async_trait]
impl SessionVerifier for SignedOutVerifier {
    async fn verify(&self, _token: &str) -> Result<bool, SessionError> {
        Ok(false)
    }
}

/// Verifier that forwards the session cookie to `AUTH_SESSION_URL`.
pub struct UpstreamVerifier {
    http: reqwest::Client,
    session_url: String,
    cookie_name: String,
}

impl UpstreamVerifier {
    /// Build a verifier for `session_url` using the cookie name and timeout
    /// from `auth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(auth: &AuthConfig, session_url: String) -> Result<Self, SessionError> {
        // Providers answer a stale session with a redirect to their login
        // page; following it would end on that page's 200.
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(auth.timeout_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| SessionError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, session_url, cookie_name: auth.session_cookie.clone() })
    }
}

#[async_trait::async_trait]
impl SessionVerifier for UpstreamVerifier {
    async fn verify(&self, token: &str) -> Result<bool, SessionError> {
        let resp = self
            .http
            .get(&self.session_url)
            .header(COOKIE, session_cookie_header(&self.cookie_name, token))
            .send()
            .await
            .map_err(|e| SessionError::Request(e.to_string()))?;
        let status = resp.status();
        tracing::debug!(%status, "upstream session check");
        Ok(authenticated_from_status(status))
    }
}

/// Build the verifier described by `auth`.
///
/// # Errors
///
/// Returns an error if an upstream verifier is configured but its HTTP client
/// fails to build.
pub fn verifier_from_config(auth: &AuthConfig) -> Result<Box<dyn SessionVerifier>, SessionError> {
    match &auth.session_url {
        Some(url) => Ok(Box::new(UpstreamVerifier::new(auth, url.clone())?)),
        None => Ok(Box::new(SignedOutVerifier)),
    }
}

/// Only a 2xx answer means signed in; redirects, 4xx and 5xx do not.
#[must_use]
pub fn authenticated_from_status(status: StatusCode) -> bool {
    status.is_success()
}

pub(crate) fn session_cookie_header(name: &str, token: &str) -> String {
    format!("{name}={token}")
}

/// Resolve the visitor's session, degrading every failure to signed out.
///
/// A missing or empty token short-circuits without contacting the provider.
pub async fn is_authenticated(verifier: &dyn SessionVerifier, token: Option<&str>) -> bool {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return false;
    };
    match verifier.verify(token).await {
        Ok(authenticated) => authenticated,
        Err(e) => {
            tracing::warn!(error = %e, "session verification failed; treating visitor as signed out");
            false
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
