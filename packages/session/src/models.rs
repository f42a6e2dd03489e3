//! # Account models shared across the workspace
//!
//! [`User`] is the client-held copy of the backend's user record, cached in the
//! session store alongside the access token. The client never mutates a user's
//! [`Role`]; it only reads it to decide which parts of the UI are visible.

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the backend. Immutable from the client's
/// perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

impl Role {
    /// Wire representation, matching the backend's lowercase strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }

    /// Capitalised label for display ("Student", "Instructor", "Admin").
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Instructor => "Instructor",
            Role::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    /// ISO 8601 timestamp; the client only ever displays it.
    pub created_at: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
