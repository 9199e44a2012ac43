#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, matched exhaustively throughout the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Teacher,
    Student,
    Admin,
}

impl Role {
    /// Wire label, shown verbatim in the account dropdown.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "TEACHER",
            Role::Student => "STUDENT",
            Role::Admin => "ADMIN",
        }
    }

    /// Dashboard route for this role.
    ///
    /// Non-teacher roles fall through to the student dashboard; the backend
    /// guards the routes themselves.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Teacher => "/dashboard",
            Role::Student | Role::Admin => "/student",
        }
    }
}

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: Role,
}

impl User {
    /// Single-letter badge initial: first name, else email, always uppercased.
    pub fn initial(&self) -> char {
        self.first_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .or_else(|| self.email.chars().next())
            .map_or('U', |c| c.to_uppercase().next().unwrap_or(c))
    }

    /// Name shown next to the avatar: first name, else the email local-part.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) => name,
            None => self.email.split('@').next().unwrap_or(""),
        }
    }
}
