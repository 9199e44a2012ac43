use super::*;
use uuid::Uuid;

fn teacher() -> User {
    User {
        id: Uuid::new_v4(),
        email: "t@school.example".to_owned(),
        first_name: Some("Tess".to_owned()),
        avatar: None,
        role: Role::Teacher,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    // Session restore is pending until the first /api/auth/me answer.
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Role accessor
// =============================================================

#[test]
fn role_none_while_anonymous() {
    assert_eq!(AuthState::default().role(), None);
}

#[test]
fn role_reflects_signed_in_user() {
    let state = AuthState {
        user: Some(teacher()),
        loading: false,
    };
    assert_eq!(state.role(), Some(Role::Teacher));
}
