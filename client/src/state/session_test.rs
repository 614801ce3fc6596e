use super::*;

#[test]
fn default_state_is_pending() {
    assert_eq!(SessionState::default(), SessionState::Pending);
    assert!(SessionState::default().is_pending());
}

#[test]
fn from_probe_maps_answers() {
    assert_eq!(SessionState::from_probe(Some(true)), SessionState::SignedIn);
    assert_eq!(SessionState::from_probe(Some(false)), SessionState::SignedOut);
}

#[test]
fn from_probe_unavailable_provider_is_signed_out() {
    assert_eq!(SessionState::from_probe(None), SessionState::SignedOut);
}

#[test]
fn timeout_settles_only_pending_state() {
    assert_eq!(SessionState::Pending.settle_after_timeout(), SessionState::TimedOut);
    assert_eq!(SessionState::SignedIn.settle_after_timeout(), SessionState::SignedIn);
    assert_eq!(SessionState::SignedOut.settle_after_timeout(), SessionState::SignedOut);
}

#[test]
fn pending_has_no_cta_variant() {
    assert_eq!(SessionState::Pending.cta_variant(), None);
}

#[test]
fn settled_states_map_to_exactly_one_variant() {
    assert_eq!(SessionState::SignedIn.cta_variant(), Some(CtaVariant::Authenticated));
    assert_eq!(SessionState::SignedOut.cta_variant(), Some(CtaVariant::Anonymous));
    assert_eq!(SessionState::TimedOut.cta_variant(), Some(CtaVariant::Anonymous));
}

#[test]
fn variant_from_authenticated_flag() {
    assert_eq!(CtaVariant::from_authenticated(true), CtaVariant::Authenticated);
    assert_eq!(CtaVariant::from_authenticated(false), CtaVariant::Anonymous);
}

#[test]
fn late_probe_answer_replaces_timeout_default() {
    let timed_out = SessionState::Pending.settle_after_timeout();
    assert_eq!(timed_out.cta_variant(), Some(CtaVariant::Anonymous));
    // A later answer is applied as-is; nothing pins the timeout value.
    let answered = SessionState::from_probe(Some(true));
    assert_eq!(answered.cta_variant(), Some(CtaVariant::Authenticated));
}

#[test]
fn attr_values_name_every_state() {
    for state in [SessionState::Pending, SessionState::SignedIn, SessionState::SignedOut, SessionState::TimedOut] {
        assert_eq!(SessionState::from_attr(state.as_attr()), Some(state));
    }
}

#[test]
fn unknown_attr_value_is_rejected() {
    assert_eq!(SessionState::from_attr(""), None);
    assert_eq!(SessionState::from_attr("true"), None);
}
