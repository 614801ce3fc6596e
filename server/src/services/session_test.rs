use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::HeaderMap;
use axum::response::{IntoResponse as _, Redirect};
use axum::routing::get;

use super::*;

/// Verifier with a canned answer that counts how often it is asked.
struct FixedVerifier {
    answer: Result<bool, ()>,
    calls: AtomicUsize,
}

impl FixedVerifier {
    fn new(answer: Result<bool, ()>) -> Self {
        Self { answer, calls: AtomicUsize::new(0) }
    }
}

#[async_trait::async_trait]
impl SessionVerifier for FixedVerifier {
    async fn verify(&self, _token: &str) -> Result<bool, SessionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.map_err(|()| SessionError::Request("connection refused".into()))
    }
}

fn auth_config(session_url: Option<&str>) -> AuthConfig {
    AuthConfig {
        session_url: session_url.map(str::to_owned),
        sign_in_url: None,
        session_cookie: "__session".to_owned(),
        timeout_secs: 1,
    }
}

#[test]
fn only_success_statuses_authenticate() {
    assert!(authenticated_from_status(StatusCode::OK));
    assert!(authenticated_from_status(StatusCode::NO_CONTENT));
    assert!(!authenticated_from_status(StatusCode::FOUND));
    assert!(!authenticated_from_status(StatusCode::UNAUTHORIZED));
    assert!(!authenticated_from_status(StatusCode::FORBIDDEN));
    assert!(!authenticated_from_status(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
fn cookie_header_pairs_name_and_token() {
    assert_eq!(session_cookie_header("__session", "abc"), "__session=abc");
}

#[tokio::test]
async fn missing_token_skips_provider() {
    let verifier = FixedVerifier::new(Ok(true));
    assert!(!is_authenticated(&verifier, None).await);
    assert!(!is_authenticated(&verifier, Some("")).await);
    assert_eq!(verifier.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_answer_is_passed_through() {
    let yes = FixedVerifier::new(Ok(true));
    let no = FixedVerifier::new(Ok(false));
    assert!(is_authenticated(&yes, Some("tok")).await);
    assert!(!is_authenticated(&no, Some("tok")).await);
    assert_eq!(yes.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn provider_failure_degrades_to_signed_out() {
    let verifier = FixedVerifier::new(Err(()));
    assert!(!is_authenticated(&verifier, Some("tok")).await);
}

#[tokio::test]
async fn signed_out_verifier_never_authenticates() {
    assert!(!is_authenticated(&SignedOutVerifier, Some("tok")).await);
}

#[tokio::test]
async fn unreachable_upstream_degrades_to_signed_out() {
    // Port 9 (discard) on loopback is not expected to serve HTTP.
    let auth = auth_config(Some("http://127.0.0.1:9/session"));
    let verifier = verifier_from_config(&auth).unwrap();
    assert!(!is_authenticated(verifier.as_ref(), Some("tok")).await);
}

#[tokio::test]
async fn unconfigured_provider_builds_signed_out_verifier() {
    let verifier = verifier_from_config(&auth_config(None)).unwrap();
    assert!(!verifier.verify("tok").await.unwrap());
}

// =============================================================================
// UpstreamVerifier against a local provider
// =============================================================================

/// Serve `router` on an ephemeral loopback port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Provider that accepts only `__session=live` and otherwise bounces the
/// visitor to a login page that itself answers 200.
fn provider() -> Router {
    Router::new()
        .route(
            "/session",
            get(|headers: HeaderMap| async move {
                let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok()).unwrap_or_default();
                if cookie == "__session=live" {
                    StatusCode::OK.into_response()
                } else {
                    Redirect::temporary("/login").into_response()
                }
            }),
        )
        .route("/login", get(|| async { "sign in here" }))
}

#[tokio::test]
async fn upstream_redirect_to_login_page_is_signed_out() {
    let base = serve(provider()).await;
    let verifier = verifier_from_config(&auth_config(Some(&format!("{base}/session")))).unwrap();
    assert!(!is_authenticated(verifier.as_ref(), Some("stale")).await);
}

#[tokio::test]
async fn upstream_live_session_cookie_is_signed_in() {
    let base = serve(provider()).await;
    let verifier = verifier_from_config(&auth_config(Some(&format!("{base}/session")))).unwrap();
    assert!(is_authenticated(verifier.as_ref(), Some("live")).await);
}
