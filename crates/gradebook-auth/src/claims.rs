//! Token payload and the fixed role set.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The three roles a person can hold.
///
/// Serialized with exactly these capitalized names. Any other string in a
/// token payload fails to decode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Role {
    Admin,
    Student,
    Teacher,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Student, Role::Teacher];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried by every access token.
///
/// `email` defaults to empty when absent so that a payload without a subject
/// still decodes and is rejected later as an invalid identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Roles held at the time of login
    pub roles: Vec<Role>,
    /// Subject email
    #[serde(default)]
    pub email: String,
    /// Expiration instant (Unix timestamp, exclusive)
    pub exp: i64,
}

impl TokenClaims {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}
