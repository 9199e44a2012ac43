#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Role;

/// A labeled route shown in the top navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

impl NavItem {
    /// Active iff the current pathname equals this item's path exactly.
    pub fn is_active(self, pathname: &str) -> bool {
        pathname == self.path
    }
}

/// Nav links for the given role, in display order.
///
/// Home and the About/Contact pair are always present; the Dashboard entry
/// appears only for roles with a dashboard of their own.
pub fn nav_items(role: Option<Role>) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        name: "Home",
        path: "/",
    }];

    match role {
        Some(Role::Teacher) => items.push(NavItem {
            name: "Dashboard",
            path: "/dashboard",
        }),
        Some(Role::Student) => items.push(NavItem {
            name: "Dashboard",
            path: "/student",
        }),
        Some(Role::Admin) | None => {}
    }

    items.push(NavItem {
        name: "About",
        path: "/about",
    });
    items.push(NavItem {
        name: "Contact",
        path: "/contact",
    });

    items
}
