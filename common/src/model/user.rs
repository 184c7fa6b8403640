use serde::{Deserialize, Serialize};

/// Role assigned to an administrative account.
///
/// Roles form a closed set; authorization decisions are made by membership
/// checks against an explicit role list rather than string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Owner,
    Admin,
    Guest,
}

/// The authenticated account as returned by the backend and mirrored in the
/// client cache.
///
/// An inactive account (`active == false`) is treated as unauthenticated for
/// every authorization decision, regardless of its role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl SessionUser {
    /// Membership check used by the route gate.
    ///
    /// Admits iff the account is active and either no roles are required or
    /// the account's role is one of them.
    pub fn is_authorized(&self, required: &[UserRole]) -> bool {
        self.active && (required.is_empty() || required.contains(&self.role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, active: bool) -> SessionUser {
        SessionUser {
            id: 1,
            username: "jdoe".into(),
            full_name: "Jane Doe".into(),
            email: "jdoe@example.com".into(),
            role,
            active,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn active_user_passes_empty_role_set() {
        assert!(user(UserRole::Guest, true).is_authorized(&[]));
    }

    #[test]
    fn inactive_user_is_rejected_even_with_matching_role() {
        assert!(!user(UserRole::Owner, false).is_authorized(&[UserRole::Owner]));
        assert!(!user(UserRole::Owner, false).is_authorized(&[]));
    }

    #[test]
    fn role_must_be_member_of_required_set() {
        assert!(user(UserRole::Admin, true).is_authorized(&[UserRole::Owner, UserRole::Admin]));
        assert!(!user(UserRole::Guest, true).is_authorized(&[UserRole::Owner, UserRole::Admin]));
        assert!(user(UserRole::Owner, true).is_authorized(&[UserRole::Owner]));
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Owner).unwrap();
        assert_eq!(json, "\"owner\"");
        let back: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(back, UserRole::Admin);
    }
}
