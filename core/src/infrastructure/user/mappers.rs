use crate::domain::user::entities::{Role, RoleName, User, UserMeta};
use crate::entity::{roles, user_meta, users};

impl From<user_meta::Model> for UserMeta {
    fn from(model: user_meta::Model) -> Self {
        UserMeta {
            id: model.id,
            email: model.email,
            name: model.name,
        }
    }
}

/// Assembles a domain user from its row, meta row and role rows. Role rows
/// with names outside the known set are dropped rather than failing the read.
pub fn assemble_user(
    model: users::Model,
    meta: user_meta::Model,
    role_rows: Vec<roles::Model>,
) -> User {
    let authorities = role_rows
        .into_iter()
        .filter_map(|row| {
            RoleName::from_str(&row.name).map(|name| Role { id: row.id, name })
        })
        .collect();

    User {
        id: model.id,
        username: model.username,
        password: model.password,
        account_non_expired: model.is_account_non_expired,
        account_non_locked: model.is_account_non_locked,
        credentials_non_expired: model.is_credentials_non_expired,
        enabled: model.is_enabled,
        authorities,
        user_meta: UserMeta::from(meta),
    }
}
