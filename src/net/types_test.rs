use super::*;

fn user(first_name: Option<&str>, email: &str, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        first_name: first_name.map(str::to_owned),
        avatar: None,
        role,
    }
}

// =============================================================
// Role wire format
// =============================================================

#[test]
fn role_parses_wire_labels() {
    for (wire, role) in [
        ("TEACHER", Role::Teacher),
        ("STUDENT", Role::Student),
        ("ADMIN", Role::Admin),
    ] {
        let parsed: Role = serde_json::from_value(serde_json::json!(wire)).expect(wire);
        assert_eq!(parsed, role);
        assert_eq!(parsed.as_str(), wire);
    }
}

#[test]
fn unknown_role_is_rejected() {
    assert!(serde_json::from_value::<Role>(serde_json::json!("SUPERVISOR")).is_err());
    assert!(serde_json::from_value::<Role>(serde_json::json!("teacher")).is_err());
}

// =============================================================
// Role dashboard routing
// =============================================================

#[test]
fn teacher_dashboard_path() {
    assert_eq!(Role::Teacher.dashboard_path(), "/dashboard");
}

#[test]
fn non_teacher_roles_use_student_dashboard() {
    assert_eq!(Role::Student.dashboard_path(), "/student");
    assert_eq!(Role::Admin.dashboard_path(), "/student");
}

// =============================================================
// User wire format
// =============================================================

#[test]
fn user_parses_camel_case_fields() {
    let parsed: User = serde_json::from_value(serde_json::json!({
        "id": "6a3a1fd0-9f0f-4b55-bd3d-111111111111",
        "email": "ann@example.com",
        "firstName": "Ann",
        "avatar": "https://cdn.example.com/ann.png",
        "role": "STUDENT",
    }))
    .expect("valid user");

    assert_eq!(parsed.first_name.as_deref(), Some("Ann"));
    assert_eq!(parsed.avatar.as_deref(), Some("https://cdn.example.com/ann.png"));
    assert_eq!(parsed.role, Role::Student);
}

#[test]
fn user_optional_fields_default_to_none() {
    let parsed: User = serde_json::from_value(serde_json::json!({
        "id": "6a3a1fd0-9f0f-4b55-bd3d-222222222222",
        "email": "bob@example.com",
        "role": "TEACHER",
    }))
    .expect("valid user");

    assert!(parsed.first_name.is_none());
    assert!(parsed.avatar.is_none());
}

// =============================================================
// Badge initial
// =============================================================

#[test]
fn initial_prefers_first_name() {
    assert_eq!(user(Some("Ann"), "a@x.com", Role::Student).initial(), 'A');
}

#[test]
fn initial_is_uppercased() {
    assert_eq!(user(Some("ann"), "a@x.com", Role::Student).initial(), 'A');
}

#[test]
fn initial_falls_back_to_email() {
    assert_eq!(user(None, "bob@x.com", Role::Teacher).initial(), 'B');
}

#[test]
fn initial_ignores_empty_first_name() {
    assert_eq!(user(Some(""), "bob@x.com", Role::Teacher).initial(), 'B');
}

#[test]
fn initial_defaults_when_nothing_usable() {
    assert_eq!(user(None, "", Role::Student).initial(), 'U');
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_prefers_first_name() {
    assert_eq!(user(Some("Ann"), "a@x.com", Role::Student).display_name(), "Ann");
}

#[test]
fn display_name_falls_back_to_email_local_part() {
    assert_eq!(user(None, "bob@x.com", Role::Teacher).display_name(), "bob");
}

#[test]
fn display_name_uses_whole_email_without_at_sign() {
    assert_eq!(user(None, "bob", Role::Teacher).display_name(), "bob");
}
