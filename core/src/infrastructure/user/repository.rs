use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, ports::UserRepository},
};
use crate::entity::roles::{
    ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as RoleEntity,
};
use crate::entity::user_meta::{ActiveModel as UserMetaActiveModel, Entity as UserMetaEntity};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::user::mappers::assemble_user;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn hydrate(&self, model: crate::entity::users::Model) -> Result<User, CoreError> {
        let meta = UserMetaEntity::find_by_id(model.user_meta_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch user meta: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or_else(|| {
                error!("User {} has no meta record", model.id);
                CoreError::InternalServerError
            })?;

        let role_rows = RoleEntity::find()
            .filter(RoleColumn::UserId.eq(model.id))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch user roles: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(assemble_user(model, meta, role_rows))
    }
}

impl UserRepository for PostgresUserRepository {
    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let model = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get user by username: {}", e);
                CoreError::InternalServerError
            })?;

        match model {
            Some(model) => Ok(Some(self.hydrate(model).await?)),
            None => Ok(None),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let model = UserEntity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get user by id: {}", e);
            CoreError::InternalServerError
        })?;

        match model {
            Some(model) => Ok(Some(self.hydrate(model).await?)),
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to open transaction: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        UserMetaEntity::insert(UserMetaActiveModel {
            id: Set(user.user_meta.id),
            email: Set(user.user_meta.email.clone()),
            name: Set(user.user_meta.name.clone()),
        })
        .exec(&txn)
        .await
        .map_err(|e| {
            error!("Failed to insert user meta: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            password: Set(user.password.clone()),
            is_account_non_expired: Set(user.account_non_expired),
            is_account_non_locked: Set(user.account_non_locked),
            is_credentials_non_expired: Set(user.credentials_non_expired),
            is_enabled: Set(user.enabled),
            user_meta_id: Set(user.user_meta.id),
        })
        .exec(&txn)
        .await
        .map_err(|e| {
            error!("Failed to insert user: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        if !user.authorities.is_empty() {
            RoleEntity::insert_many(user.authorities.iter().map(|role| RoleActiveModel {
                id: Set(role.id),
                user_id: Set(user.id),
                name: Set(role.name.as_str().to_string()),
            }))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to insert roles: {}", e);
                CoreError::InvalidState(e.to_string())
            })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit user creation: {}", e);
            CoreError::InvalidState(e.to_string())
        })?;

        Ok(user)
    }
}
