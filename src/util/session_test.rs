use super::*;

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        token: "jwt-abc".to_owned(),
        user: User {
            id: "64f1c0ffee0ddba11ca7e511".to_owned(),
            first_name: "ada".to_owned(),
            role: "admin".to_owned(),
            ..User::default()
        },
    };
    let raw = serde_json::to_string(&session).unwrap();
    let decoded: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, session);
}

#[test]
fn malformed_session_fails_to_decode() {
    assert!(serde_json::from_str::<Session>("{\"token\":\"jwt\"}").is_err());
    assert!(serde_json::from_str::<Session>("not json").is_err());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_without_a_browser_is_logged_out() {
    assert!(load().is_none());
}
