use super::*;

fn user_with_role(role: &str) -> User {
    User { role: role.to_owned(), ..User::default() }
}

#[test]
fn default_session_is_loading_and_logged_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn absent_user_is_not_admin() {
    assert!(!SessionState::default().is_admin());
}

#[test]
fn admin_role_is_recognized() {
    let state = SessionState {
        user: Some(user_with_role(ADMIN_ROLE)),
        token: Some("tok".to_owned()),
        loading: false,
    };
    assert!(state.is_admin());
}

#[test]
fn other_roles_are_rejected() {
    for role in ["user", "Admin", "ADMIN", ""] {
        let state = SessionState {
            user: Some(user_with_role(role)),
            token: None,
            loading: false,
        };
        assert!(!state.is_admin(), "role {role:?} must not pass the guard");
    }
}
