//! Auth adapter routes: session probe and sign-in hand-off.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::net::types::SessionStatus;
use reqwest::Url;

use crate::config::ServerConfig;
use crate::services::session;
use crate::state::AppState;

/// `GET /api/auth/session`: whether the visitor's cookie is a live session.
///
/// Always answers 200; provider failures surface as `authenticated: false`.
/// The answer is marked `no-store` so a sign-in or sign-out is never masked
/// by a cached probe.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    let token = jar.get(&state.config.auth.session_cookie).map(Cookie::value);
    let authenticated = session::is_authenticated(state.sessions.as_ref(), token).await;
    ([(header::CACHE_CONTROL, "no-store")], Json(SessionStatus { authenticated })).into_response()
}

/// `GET /sign-in`: redirect to the provider's hosted sign-in page.
pub async fn sign_in(State(state): State<AppState>) -> Response {
    match sign_in_target(&state.config) {
        Some(target) => Redirect::to(&target).into_response(),
        None => (StatusCode::SERVICE_UNAVAILABLE, "sign-in provider not configured").into_response(),
    }
}

/// Provider sign-in URL with a `redirect_url` back to the landing page.
pub(crate) fn sign_in_target(config: &ServerConfig) -> Option<String> {
    let base = config.auth.sign_in_url.as_deref()?;
    let return_to = format!("{}/", config.public_url);
    Url::parse_with_params(base, &[("redirect_url", return_to.as_str())])
        .map(String::from)
        .ok()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
