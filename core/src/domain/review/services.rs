use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    recipe::{
        entities::recipe::Recipe,
        ports::{RecipeRepository, RecipeService},
    },
    review::{
        entities::Review,
        ports::{ReviewPolicy, ReviewRepository, ReviewService},
        value_objects::{PostReviewInput, UpdateReviewInput},
    },
    user::ports::UserRepository,
};

impl<R, V, U, H> ReviewService for Service<R, V, U, H>
where
    R: RecipeRepository,
    V: ReviewRepository,
    U: UserRepository,
    H: HasherRepository,
{
    async fn get_review_by_id(&self, id: Uuid) -> Result<Review, CoreError> {
        self.review_repository.get_by_id(id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("The review with ID {id} could not be found."))
        })
    }

    async fn get_reviews_by_recipe_id(&self, recipe_id: Uuid) -> Result<Vec<Review>, CoreError> {
        let recipe = self.get_recipe_by_id(recipe_id).await?;

        if recipe.reviews.is_empty() {
            return Err(CoreError::NotFound(
                "There are no reviews for this recipe.".to_string(),
            ));
        }

        Ok(recipe.reviews)
    }

    async fn get_reviews_by_username(&self, username: String) -> Result<Vec<Review>, CoreError> {
        let reviews = self
            .review_repository
            .find_by_username(username.clone())
            .await?;

        if reviews.is_empty() {
            return Err(CoreError::NotFound(format!(
                "No reviews could be found for username {username}"
            )));
        }

        Ok(reviews)
    }

    async fn post_review(&self, input: PostReviewInput) -> Result<Recipe, CoreError> {
        let review = Review::new(
            input.username,
            input.rating,
            input.description,
            Some(input.recipe_id),
        )?;

        let mut recipe = self.get_recipe_by_id(input.recipe_id).await?;
        recipe.reviews.push(review);

        // The recipe was loaded just above; no forced id re-check. The
        // average score is recomputed on the next read, not eagerly here.
        self.store_recipe(recipe, false).await
    }

    async fn update_review(
        &self,
        identity: Identity,
        input: UpdateReviewInput,
    ) -> Result<Review, CoreError> {
        ensure_policy(
            self.policy.can_edit_review(identity, input.id).await,
            "You do not have permission to edit this review",
        )?;

        if let Err(CoreError::NotFound(_)) = self.get_review_by_id(input.id).await {
            return Err(CoreError::NotFound(
                "The review you are trying to update does not exist. Maybe you meant to \
                 create one? If not, please double check the ID you passed in."
                    .to_string(),
            ));
        }

        let mut review = Review::new(
            input.username,
            input.rating,
            input.description,
            input.recipe_id,
        )?;
        review.id = input.id;

        self.review_repository.save(review).await
    }

    async fn delete_review_by_id(&self, identity: Identity, id: Uuid) -> Result<Review, CoreError> {
        ensure_policy(
            self.policy.can_delete_review(identity, id).await,
            "You do not have permission to delete this review",
        )?;

        let review = self.get_review_by_id(id).await.map_err(|e| match e {
            CoreError::NotFound(_) => CoreError::NotFound(
                "The review you are trying to delete does not exist.".to_string(),
            ),
            other => other,
        })?;

        self.review_repository.delete_by_id(id).await?;
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::{
        admin_identity, create_input, service_with_in_memory_repositories, user_identity,
    };

    async fn seeded_recipe_id<S>(service: &S) -> Uuid
    where
        S: RecipeService,
    {
        service
            .create_recipe(
                None,
                create_input(
                    "caramel in a pan",
                    vec![("brown sugar", "1 cup", Some("dry"))],
                    vec![(1, "heat pan"), (2, "add sugar")],
                    vec![],
                ),
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn posting_a_review_attaches_it_to_the_recipe() {
        let service = service_with_in_memory_repositories();
        let recipe_id = seeded_recipe_id(&service).await;

        let recipe = service
            .post_review(PostReviewInput {
                recipe_id,
                username: "idk".to_string(),
                rating: 3,
                description: Some("was just caramel".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(recipe.reviews.len(), 1);
        assert_eq!(recipe.reviews[0].username, "idk");

        // Recomputed lazily on the next read.
        let fetched = service.get_recipe_by_id(recipe_id).await.unwrap();
        assert_eq!(fetched.average_review_score, Some(3));
    }

    #[tokio::test]
    async fn posting_a_review_to_a_missing_recipe_propagates_not_found() {
        let service = service_with_in_memory_repositories();
        let recipe_id = Uuid::new_v4();

        let result = service
            .post_review(PostReviewInput {
                recipe_id,
                username: "idk".to_string(),
                rating: 3,
                description: None,
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::NotFound(format!("No recipe with ID {recipe_id} could be found."))
        );
    }

    #[tokio::test]
    async fn reviews_for_a_recipe_without_any_fail_with_not_found() {
        let service = service_with_in_memory_repositories();
        let recipe_id = seeded_recipe_id(&service).await;

        let result = service.get_reviews_by_recipe_id(recipe_id).await;

        assert_eq!(
            result.unwrap_err(),
            CoreError::NotFound("There are no reviews for this recipe.".to_string())
        );
    }

    #[tokio::test]
    async fn only_the_review_author_or_an_admin_may_delete_it() {
        let service = service_with_in_memory_repositories();
        let recipe_id = seeded_recipe_id(&service).await;

        let recipe = service
            .post_review(PostReviewInput {
                recipe_id,
                username: "idk".to_string(),
                rating: 3,
                description: None,
            })
            .await
            .unwrap();
        let review_id = recipe.reviews[0].id;

        let denied = service
            .delete_review_by_id(user_identity("bob"), review_id)
            .await;
        assert!(matches!(denied, Err(CoreError::Forbidden(_))));

        let allowed = service
            .delete_review_by_id(user_identity("idk"), review_id)
            .await;
        assert!(allowed.is_ok());

        // Already gone; the existence check reports it.
        let gone = service
            .delete_review_by_id(admin_identity("root"), review_id)
            .await;
        assert!(matches!(gone, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn updating_a_missing_review_hints_at_create_versus_update() {
        let service = service_with_in_memory_repositories();

        let result = service
            .update_review(
                admin_identity("root"),
                UpdateReviewInput {
                    id: Uuid::new_v4(),
                    username: "idk".to_string(),
                    rating: 5,
                    description: None,
                    recipe_id: None,
                },
            )
            .await;

        // The admin bypasses the ownership lookup, so the service's own
        // existence check is what fires here.
        assert_eq!(
            result.unwrap_err(),
            CoreError::NotFound(
                "The review you are trying to update does not exist. Maybe you meant to \
                 create one? If not, please double check the ID you passed in."
                    .to_string()
            )
        );
    }

    #[tokio::test]
    async fn reviews_can_be_listed_by_username() {
        let service = service_with_in_memory_repositories();
        let recipe_id = seeded_recipe_id(&service).await;

        service
            .post_review(PostReviewInput {
                recipe_id,
                username: "idk".to_string(),
                rating: 3,
                description: None,
            })
            .await
            .unwrap();

        let reviews = service
            .get_reviews_by_username("idk".to_string())
            .await
            .unwrap();
        assert_eq!(reviews.len(), 1);

        let none = service.get_reviews_by_username("ghost".to_string()).await;
        assert_eq!(
            none.unwrap_err(),
            CoreError::NotFound("No reviews could be found for username ghost".to_string())
        );
    }
}
