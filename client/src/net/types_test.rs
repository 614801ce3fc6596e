use super::*;

#[test]
fn session_status_serializes_flag() {
    let json = serde_json::to_value(SessionStatus { authenticated: true }).unwrap();
    assert_eq!(json, serde_json::json!({ "authenticated": true }));
}

#[test]
fn session_status_rejects_missing_flag() {
    assert!(serde_json::from_str::<SessionStatus>("{}").is_err());
}

#[test]
fn session_status_ignores_unknown_fields() {
    let status: SessionStatus =
        serde_json::from_str(r#"{"authenticated":false,"provider":"upstream"}"#).unwrap();
    assert!(!status.authenticated);
}
