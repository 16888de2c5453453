use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Authenticated user as returned by `/login` (`user`) and kept in the
/// session file (`currentUser`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(rename = "id")]
    pub user_id: u64,
    #[serde(rename = "nombre")]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "rol")]
    pub role: Role,
    /// Institutional code, e.g. `EST001`.
    #[serde(rename = "codigo", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "programa", default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl UserProfile {
    /// Initials of the display name (`Ana López García` → `ALG`).
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        if initials.is_empty() {
            "U".to_string()
        } else {
            initials
        }
    }
}

/// Identity and bearer token of the user logged in on this terminal.
///
/// Serializes to the session-storage shape `{token, currentUser}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "currentUser")]
    pub user: UserProfile,
    /// Opaque bearer token. Demo logins carry none.
    #[serde(rename = "token", default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Session {
    #[must_use]
    pub const fn new(user: UserProfile, auth_token: Option<String>) -> Self {
        Self { user, auth_token }
    }

    #[must_use]
    pub const fn user_id(&self) -> u64 {
        self.user.user_id
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.user.display_name
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.user.role
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.email.as_deref()
    }
}
