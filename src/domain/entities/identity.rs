use serde::{Deserialize, Serialize};

/// Roster user id that grants the admin role.
pub const ADMIN_USER_ID: &str = "admin";

/// Canonical form of an email address: surrounding whitespace removed, lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Role of a logged-in employee, derived from the roster's user id column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Exactly the id `admin` (ignoring case and surrounding whitespace) is an admin.
    pub fn from_user_id(user_id: &str) -> Self {
        if user_id.trim().eq_ignore_ascii_case(ADMIN_USER_ID) {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The identity a session holds after a successful login.
///
/// Never persisted by the booking store, which only keeps `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub email: String,
    pub display_name: String,
    pub role: Role,
}
