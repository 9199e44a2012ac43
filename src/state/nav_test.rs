use super::*;

fn names(items: &[NavItem]) -> Vec<&'static str> {
    items.iter().map(|i| i.name).collect()
}

// =============================================================
// Role-dependent item lists
// =============================================================

#[test]
fn anonymous_nav_has_no_dashboard() {
    let items = nav_items(None);
    assert_eq!(names(&items), ["Home", "About", "Contact"]);
}

#[test]
fn teacher_dashboard_points_at_teacher_route() {
    let items = nav_items(Some(Role::Teacher));
    assert_eq!(names(&items), ["Home", "Dashboard", "About", "Contact"]);
    assert_eq!(items[1].path, "/dashboard");
}

#[test]
fn student_dashboard_points_at_student_route() {
    let items = nav_items(Some(Role::Student));
    assert_eq!(names(&items), ["Home", "Dashboard", "About", "Contact"]);
    assert_eq!(items[1].path, "/student");
}

#[test]
fn admin_gets_no_dashboard_entry() {
    let items = nav_items(Some(Role::Admin));
    assert_eq!(names(&items), ["Home", "About", "Contact"]);
}

// =============================================================
// Active matching
// =============================================================

#[test]
fn item_active_on_exact_path_match_only() {
    let home = NavItem {
        name: "Home",
        path: "/",
    };
    assert!(home.is_active("/"));
    assert!(!home.is_active("/about"));

    let dashboard = NavItem {
        name: "Dashboard",
        path: "/dashboard",
    };
    assert!(dashboard.is_active("/dashboard"));
    // No prefix or fuzzy matching.
    assert!(!dashboard.is_active("/dashboard/"));
    assert!(!dashboard.is_active("/dashboard/classes"));
}
