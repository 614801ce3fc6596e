//! REST helpers for the auth adapter endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` and `web-sys`.
//! Server-side (SSR): stubs, since the session probe and sign-in redirect are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a missing or broken auth
//! provider degrades the page to the signed-out view without crashing
//! hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::SessionStatus;

/// Session probe endpoint served by the auth adapter.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

/// Sign-in entry point; the server redirects to the hosted provider page.
pub const SIGN_IN_PATH: &str = "/sign-in";

#[cfg(any(test, feature = "hydrate"))]
fn session_probe_failed_message(status: u16) -> String {
    format!("session probe failed: {status}")
}

/// Ask the auth adapter whether the visitor is signed in.
///
/// Returns `None` if the request fails, the adapter answers with a non-2xx
/// status, or when called on the server.
pub async fn fetch_session() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SESSION_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session probe transport error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::warn!("{}", session_probe_failed_message(resp.status()));
            return None;
        }
        resp.json::<SessionStatus>().await.ok().map(|s| s.authenticated)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Hand the visitor to the external sign-in flow.
///
/// The provider owns the flow and sends the browser back to the landing page
/// when it completes, where the session is probed again.
pub fn begin_sign_in() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(SIGN_IN_PATH);
        }
    }
}
