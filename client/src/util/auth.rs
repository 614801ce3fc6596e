//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated routes should apply identical signed-out redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Where signed-out visitors are sent from authenticated routes.
pub const SIGNED_OUT_REDIRECT: &str = "/";

/// True once an answer says there is no signed-in visitor. A probe that only
/// timed out does not count; a slow answer may still sign the visitor in.
#[must_use]
pub fn should_redirect_unauth(state: SessionState) -> bool {
    matches!(state, SessionState::SignedOut)
}

/// Redirect to the landing page whenever the session settles as signed out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(session.get()) {
            navigate(SIGNED_OUT_REDIRECT, NavigateOptions::default());
        }
    });
}
