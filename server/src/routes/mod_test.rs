use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt as _;

use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_is_ok() {
    let resp = api_routes(test_app_state())
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_api_path_is_not_found() {
    let resp = api_routes(test_app_state())
        .oneshot(Request::builder().uri("/api/auth/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// resolve_session
// =============================================================================

mod session_resolution {
    use std::sync::Arc;

    use axum::http::{HeaderMap, HeaderValue, header};
    use axum_extra::extract::cookie::CookieJar;
    use client::state::session::SessionState;

    use crate::routes::resolve_session;
    use crate::services::session::{SessionError, SessionVerifier};
    use crate::state::test_helpers::{test_app_state, test_app_state_with, test_config};

    struct AcceptToken(&'static str);

    #[async_trait::async_trait]
    impl SessionVerifier for AcceptToken {
        async fn verify(&self, token: &str) -> Result<bool, SessionError> {
            Ok(token == self.0)
        }
    }

    fn jar(cookie: &'static str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        CookieJar::from_headers(&headers)
    }

    #[tokio::test]
    async fn live_cookie_renders_signed_in() {
        let state = test_app_state_with(test_config(), Arc::new(AcceptToken("live")));
        assert_eq!(resolve_session(&state, &jar("__session=live")).await, SessionState::SignedIn);
    }

    #[tokio::test]
    async fn missing_or_rejected_cookie_renders_signed_out() {
        let state = test_app_state_with(test_config(), Arc::new(AcceptToken("live")));
        assert_eq!(resolve_session(&state, &CookieJar::new()).await, SessionState::SignedOut);
        assert_eq!(resolve_session(&state, &jar("__session=stale")).await, SessionState::SignedOut);
    }

    #[tokio::test]
    async fn unconfigured_provider_never_renders_pending() {
        let resolved = resolve_session(&test_app_state(), &jar("__session=anything")).await;
        assert!(!resolved.is_pending());
    }
}
