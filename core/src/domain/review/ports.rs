use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::entities::recipe::Recipe,
    review::{
        entities::Review,
        value_objects::{PostReviewInput, UpdateReviewInput},
    },
};

pub trait ReviewService: Send + Sync {
    fn get_review_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn get_reviews_by_recipe_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Review>, CoreError>> + Send;

    fn get_reviews_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Vec<Review>, CoreError>> + Send;

    /// Appends the review to the recipe's set and stores the recipe. Returns
    /// the recipe; its average score is recomputed on the next read, not here.
    fn post_review(
        &self,
        input: PostReviewInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn update_review(
        &self,
        identity: Identity,
        input: UpdateReviewInput,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_review_by_id(
        &self,
        identity: Identity,
        id: Uuid,
    ) -> impl Future<Output = Result<Review, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ReviewRepository: Send + Sync {
    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Review>, CoreError>> + Send;

    fn find_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Vec<Review>, CoreError>> + Send;

    fn save(&self, review: Review) -> impl Future<Output = Result<Review, CoreError>> + Send;

    fn delete_by_id(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait ReviewPolicy: Send + Sync {
    fn can_edit_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_delete_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
