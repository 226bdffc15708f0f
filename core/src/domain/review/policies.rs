use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{LadlePolicy, PermissionTarget},
    },
    recipe::ports::RecipeRepository,
    review::ports::{ReviewPolicy, ReviewRepository},
};

impl<R, V> ReviewPolicy for LadlePolicy<R, V>
where
    R: RecipeRepository,
    V: ReviewRepository,
{
    async fn can_edit_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> Result<bool, CoreError> {
        self.evaluate(&identity, "edit", PermissionTarget::Review(review_id))
            .await
    }

    async fn can_delete_review(
        &self,
        identity: Identity,
        review_id: Uuid,
    ) -> Result<bool, CoreError> {
        self.evaluate(&identity, "delete", PermissionTarget::Review(review_id))
            .await
    }
}
