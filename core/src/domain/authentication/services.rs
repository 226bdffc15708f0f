use crate::domain::{
    authentication::{ports::AuthService, value_objects::Identity},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    recipe::ports::RecipeRepository,
    review::ports::ReviewRepository,
    user::ports::UserRepository,
};

impl<R, V, U, H> AuthService for Service<R, V, U, H>
where
    R: RecipeRepository,
    V: ReviewRepository,
    U: UserRepository,
    H: HasherRepository,
{
    async fn authenticate(&self, username: String, password: String) -> Result<Identity, CoreError> {
        let user = self
            .user_repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| CoreError::Unauthorized("Invalid username or password".to_string()))?;

        let valid = self
            .hasher_repository
            .verify_password(password, user.password.clone())
            .await?;

        if !valid {
            return Err(CoreError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        if !user.is_active() {
            return Err(CoreError::Unauthorized(
                "This account is locked, expired or disabled".to_string(),
            ));
        }

        Ok(Identity::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::service_with_in_memory_repositories;
    use crate::domain::user::{ports::UserService, value_objects::RegisterUserInput};

    #[tokio::test]
    async fn valid_credentials_resolve_an_identity() {
        let service = service_with_in_memory_repositories();
        let user = service
            .register_user(RegisterUserInput {
                username: "alice".to_string(),
                password: Some("hunter22".to_string()),
                email: "alice@example.com".to_string(),
                name: "Alice".to_string(),
            })
            .await
            .unwrap();

        let identity = service
            .authenticate("alice".to_string(), "hunter22".to_string())
            .await
            .unwrap();

        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "alice");
        assert!(!identity.is_admin());
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_both_unauthorized() {
        let service = service_with_in_memory_repositories();
        service
            .register_user(RegisterUserInput {
                username: "alice".to_string(),
                password: Some("hunter22".to_string()),
                email: "alice@example.com".to_string(),
                name: "Alice".to_string(),
            })
            .await
            .unwrap();

        let wrong_password = service
            .authenticate("alice".to_string(), "wrong".to_string())
            .await;
        let unknown_user = service
            .authenticate("ghost".to_string(), "hunter22".to_string())
            .await;

        assert!(matches!(wrong_password, Err(CoreError::Unauthorized(_))));
        assert!(matches!(unknown_user, Err(CoreError::Unauthorized(_))));
    }
}
