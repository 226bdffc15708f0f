use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    recipe::ports::RecipeRepository,
    review::ports::ReviewRepository,
    user::{
        entities::{User, UserMeta},
        ports::{UserRepository, UserService},
        value_objects::RegisterUserInput,
    },
};

fn check_password(password: Option<&str>) -> Result<(), CoreError> {
    let Some(password) = password else {
        return Err(CoreError::InvalidState("You must set a password".to_string()));
    };
    if password.len() < 6 {
        return Err(CoreError::InvalidState(
            "Password is too short. Must be longer than 6 characters".to_string(),
        ));
    }
    Ok(())
}

impl<R, V, U, H> UserService for Service<R, V, U, H>
where
    R: RecipeRepository,
    V: ReviewRepository,
    U: UserRepository,
    H: HasherRepository,
{
    async fn register_user(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        check_password(input.password.as_deref())?;

        // check_password established the password is present.
        let password = input.password.unwrap_or_default();
        let password_hash = self.hasher_repository.hash_password(password).await?;

        let user = User::new(
            input.username,
            password_hash,
            UserMeta::new(input.email, input.name),
        );

        self.user_repository.create_user(user).await
    }

    async fn get_user_by_username(&self, username: String) -> Result<User, CoreError> {
        self.user_repository
            .get_by_username(username.clone())
            .await?
            .ok_or_else(|| {
                CoreError::NotFound(format!(
                    "{username} is not a valid username! Check for typos and try again."
                ))
            })
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("No user with ID {id} could be found.")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::service_with_in_memory_repositories;
    use crate::domain::user::entities::RoleName;

    fn register_input(password: Option<&str>) -> RegisterUserInput {
        RegisterUserInput {
            username: "alice".to_string(),
            password: password.map(str::to_string),
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
        }
    }

    #[tokio::test]
    async fn registration_requires_a_password() {
        let service = service_with_in_memory_repositories();

        let result = service.register_user(register_input(None)).await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::InvalidState("You must set a password".to_string())
        );
    }

    #[tokio::test]
    async fn short_passwords_are_rejected() {
        let service = service_with_in_memory_repositories();

        let result = service.register_user(register_input(Some("nope"))).await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::InvalidState(
                "Password is too short. Must be longer than 6 characters".to_string()
            )
        );
    }

    #[tokio::test]
    async fn registration_hashes_the_password_and_forces_the_user_role() {
        let service = service_with_in_memory_repositories();

        let user = service
            .register_user(register_input(Some("hunter22")))
            .await
            .unwrap();

        assert_ne!(user.password, "hunter22");
        assert_eq!(user.authorities.len(), 1);
        assert_eq!(user.authorities[0].name, RoleName::User);
        assert!(user.is_active());
    }

    #[tokio::test]
    async fn unknown_usernames_fail_with_a_typo_hint() {
        let service = service_with_in_memory_repositories();

        let result = service.get_user_by_username("ghost".to_string()).await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::NotFound(
                "ghost is not a valid username! Check for typos and try again.".to_string()
            )
        );
    }
}
