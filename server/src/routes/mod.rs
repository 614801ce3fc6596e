//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the auth adapter endpoints and stitches them with Leptos
//! SSR rendering under a single Axum router. Compiled client assets are
//! served from `/pkg`.
//!
//! Pages are rendered with the visitor's session already resolved from the
//! request cookie, so the first paint shows a settled call-to-action even if
//! the browser never runs the client bundle.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::{FromRef, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use client::state::session::SessionState;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::session;
use crate::state::AppState;

/// State for the SSR page routes.
#[derive(Clone)]
struct SiteState {
    leptos_options: LeptosOptions,
    app: AppState,
}

impl FromRef<SiteState> for LeptosOptions {
    fn from_ref(state: &SiteState) -> Self {
        state.leptos_options.clone()
    }
}

/// Auth adapter and health routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/sign-in", get(auth::sign_in))
        .route("/api/auth/session", get(auth::session))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed cargo-leptos metadata).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes_with_handler(routes, get(render_page))
        .with_state(SiteState { leptos_options, app: state.clone() });

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Resolve the visitor's session from the request cookie.
pub(crate) async fn resolve_session(state: &AppState, jar: &CookieJar) -> SessionState {
    let token = jar.get(&state.config.auth.session_cookie).map(Cookie::value);
    let authenticated = session::is_authenticated(state.sessions.as_ref(), token).await;
    SessionState::from_probe(Some(authenticated))
}

/// Render a page with the resolved session provided as context.
async fn render_page(State(site): State<SiteState>, jar: CookieJar, req: Request<Body>) -> Response {
    let resolved = resolve_session(&site.app, &jar).await;
    tracing::debug!(session = ?resolved, path = %req.uri().path(), "rendering page");
    let options = site.leptos_options;
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || provide_context(resolved),
        move || client::app::shell(options.clone()),
    );
    handler(req).await.into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
