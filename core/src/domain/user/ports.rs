use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::RegisterUserInput},
};

pub trait UserService: Send + Sync {
    fn register_user(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_user_by_id(&self, id: Uuid) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Inserts the user together with its meta record and role rows in one
    /// unit of work. Constraint violations surface as `InvalidState` with the
    /// store's message attached.
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;
}
