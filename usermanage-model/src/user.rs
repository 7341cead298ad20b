//! User account types as the backend serializes them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the dashboard user list, received verbatim from the list
/// endpoint. The backend owns the durable copy; the client never constructs
/// rows except when patching a row from an edit response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_active: bool,
}

impl UserRow {
    /// Classify the row into its exclusive role tier.
    pub fn role_tier(&self) -> RoleTier {
        RoleTier::from_flags(self.is_superuser, self.is_staff)
    }
}

/// The authenticated user's own profile payload.
///
/// Username and email are displayed but not editable in the profile view;
/// they are still part of the full-replace update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

impl Profile {
    pub fn role_tier(&self) -> RoleTier {
        RoleTier::from_flags(self.is_superuser, self.is_staff)
    }

    /// Role label as the profile view renders it.
    pub fn role_label(&self) -> &'static str {
        match self.role_tier() {
            RoleTier::Superuser => "Superuser (Admin)",
            RoleTier::Staff => "Staff",
            RoleTier::User => "User",
        }
    }
}

/// Mutually exclusive role classification derived from the two backend
/// boolean flags. The superuser tier wins over staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleTier {
    Superuser,
    Staff,
    User,
}

impl RoleTier {
    pub fn all() -> &'static [RoleTier] {
        &[RoleTier::Superuser, RoleTier::Staff, RoleTier::User]
    }

    /// Exhaustive, disjoint partition: every flag combination lands in
    /// exactly one tier.
    pub fn from_flags(is_superuser: bool, is_staff: bool) -> Self {
        if is_superuser {
            RoleTier::Superuser
        } else if is_staff {
            RoleTier::Staff
        } else {
            RoleTier::User
        }
    }

    /// The flag pair an edit form writes back for this tier.
    pub fn to_flags(self) -> (bool, bool) {
        match self {
            RoleTier::Superuser => (true, false),
            RoleTier::Staff => (false, true),
            RoleTier::User => (false, false),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoleTier::Superuser => "Superuser",
            RoleTier::Staff => "Staff",
            RoleTier::User => "User",
        }
    }
}

impl fmt::Display for RoleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
