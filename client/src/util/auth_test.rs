use super::*;

#[test]
fn should_redirect_unauth_when_signed_out() {
    assert!(should_redirect_unauth(SessionState::SignedOut));
}

#[test]
fn should_not_redirect_while_pending() {
    assert!(!should_redirect_unauth(SessionState::Pending));
}

#[test]
fn should_not_redirect_when_signed_in() {
    assert!(!should_redirect_unauth(SessionState::SignedIn));
}

#[test]
fn should_not_redirect_after_session_timeout() {
    assert!(!should_redirect_unauth(SessionState::TimedOut));
}
