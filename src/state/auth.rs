#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and session-restore status.
///
/// Provided app-wide as an `RwSignal<AuthState>` context. `loading` starts
/// `true` and flips to `false` once the `/api/auth/me` round trip answers
/// after hydration.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
