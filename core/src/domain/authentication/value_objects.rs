use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::{RoleName, User};

/// The authenticated principal attached to a request.
///
/// Resolved exactly once per request by the Basic-auth middleware and carried
/// immutably from there; policies compare its id/username against the stored
/// owner of the target entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub roles: Vec<RoleName>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&RoleName::Admin)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            roles: user.authorities.iter().map(|role| role.name).collect(),
        }
    }
}
