//! Session state for the current visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server resolves the session from the request cookie before rendering
//! and records it on `<body>` so hydration starts from the same value. Only
//! when that is missing does the browser start `Pending` and probe the auth
//! adapter itself. Call-to-action controls never read this directly; the page
//! derives one [`CtaVariant`] per render pass and hands it to every control so
//! they cannot disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// How long the browser waits for the session probe before treating the
/// visitor as signed out.
pub const SESSION_PROBE_TIMEOUT_MS: u64 = 3_000;

/// `<body>` attribute carrying the server-resolved state to hydration.
pub const SESSION_ATTR: &str = "data-session";

/// Whether the visitor has a session, as last reported by the auth provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing has answered yet.
    #[default]
    Pending,
    SignedIn,
    SignedOut,
    /// The probe deadline passed without an answer. Rendered like
    /// `SignedOut`, but authenticated routes keep waiting for the real answer.
    TimedOut,
}

impl SessionState {
    /// Map a probe result to a settled state.
    ///
    /// `None` means the provider could not be reached or answered garbage;
    /// that is treated as signed out so the visitor is offered sign-in.
    #[must_use]
    pub fn from_probe(authenticated: Option<bool>) -> Self {
        match authenticated {
            Some(true) => Self::SignedIn,
            Some(false) | None => Self::SignedOut,
        }
    }

    /// Settle a state that is still pending when the probe deadline passes.
    #[must_use]
    pub fn settle_after_timeout(self) -> Self {
        match self {
            Self::Pending => Self::TimedOut,
            settled => settled,
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The CTA variant for this state, or `None` while still pending.
    #[must_use]
    pub fn cta_variant(self) -> Option<CtaVariant> {
        match self {
            Self::Pending => None,
            Self::SignedIn => Some(CtaVariant::Authenticated),
            Self::SignedOut | Self::TimedOut => Some(CtaVariant::Anonymous),
        }
    }

    /// Value written to [`SESSION_ATTR`].
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::SignedIn => "signed-in",
            Self::SignedOut => "signed-out",
            Self::TimedOut => "timed-out",
        }
    }

    /// Parse a [`SESSION_ATTR`] value; unknown values yield `None`.
    #[must_use]
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "signed-in" => Some(Self::SignedIn),
            "signed-out" => Some(Self::SignedOut),
            "timed-out" => Some(Self::TimedOut),
            _ => None,
        }
    }
}

/// Which branch a call-to-action renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaVariant {
    Authenticated,
    Anonymous,
}

impl CtaVariant {
    #[must_use]
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated { Self::Authenticated } else { Self::Anonymous }
    }
}
