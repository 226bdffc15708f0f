use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    User,
    Admin,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::User => "USER",
            RoleName::Admin => "ADMIN",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(RoleName::User),
            "ADMIN" => Some(RoleName::Admin),
            _ => None,
        }
    }
}

/// Role rows are owned by their user and deleted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: Uuid,
    pub name: RoleName,
}

impl Role {
    pub fn new(name: RoleName) -> Self {
        Self {
            id: generate_uuid_v7(),
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserMeta {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl UserMeta {
    pub fn new(email: String, name: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            email,
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Stored hash. Readable when constructing a user, never serialized out.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub account_non_expired: bool,
    pub account_non_locked: bool,
    pub credentials_non_expired: bool,
    pub enabled: bool,
    pub authorities: Vec<Role>,
    pub user_meta: UserMeta,
}

impl User {
    /// Registration constructor. Whatever the caller asked for, a new account
    /// starts active with exactly the USER role.
    pub fn new(username: String, password_hash: String, user_meta: UserMeta) -> Self {
        Self {
            id: generate_uuid_v7(),
            username,
            password: password_hash,
            account_non_expired: true,
            account_non_locked: true,
            credentials_non_expired: true,
            enabled: true,
            authorities: vec![Role::new(RoleName::User)],
            user_meta,
        }
    }

    pub fn is_active(&self) -> bool {
        self.account_non_expired
            && self.account_non_locked
            && self.credentials_non_expired
            && self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_forces_a_single_user_role_and_active_flags() {
        let user = User::new(
            "alice".to_string(),
            "$argon2id$fake".to_string(),
            UserMeta::new("alice@example.com".to_string(), "Alice".to_string()),
        );

        assert_eq!(user.authorities.len(), 1);
        assert_eq!(user.authorities[0].name, RoleName::User);
        assert!(user.is_active());
    }

    #[test]
    fn password_is_never_serialized() {
        let user = User::new(
            "alice".to_string(),
            "$argon2id$fake".to_string(),
            UserMeta::new("alice@example.com".to_string(), "Alice".to_string()),
        );

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "alice");
    }
}
