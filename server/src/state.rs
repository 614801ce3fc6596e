//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds immutable configuration and the session verifier; nothing in it is
//! mutated after startup.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::session::{SessionError, SessionVerifier, verifier_from_config};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub sessions: Arc<dyn SessionVerifier>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, sessions: Arc<dyn SessionVerifier>) -> Self {
        Self { config: Arc::new(config), sessions }
    }

    /// Build state with the verifier described by `config.auth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn from_config(config: ServerConfig) -> Result<Self, SessionError> {
        let sessions = Arc::from(verifier_from_config(&config.auth)?);
        Ok(Self::new(config, sessions))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::config::AuthConfig;
    use crate::services::session::SignedOutVerifier;

    /// Config with no provider configured.
    #[must_use]
    pub fn test_config() -> ServerConfig {
        ServerConfig {
            port: 3000,
            public_url: "http://localhost:3000".to_owned(),
            auth: AuthConfig {
                session_url: None,
                sign_in_url: None,
                session_cookie: "__session".to_owned(),
                timeout_secs: 1,
            },
        }
    }

    /// State that treats every visitor as signed out.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(test_config(), Arc::new(SignedOutVerifier))
    }

    /// State using a custom verifier and config.
    #[must_use]
    pub fn test_app_state_with(config: ServerConfig, sessions: Arc<dyn SessionVerifier>) -> AppState {
        AppState::new(config, sessions)
    }
}
