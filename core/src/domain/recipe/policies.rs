use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        policies::{LadlePolicy, PermissionTarget},
    },
    recipe::ports::{RecipePolicy, RecipeRepository},
    review::ports::ReviewRepository,
};

impl<R, V> RecipePolicy for LadlePolicy<R, V>
where
    R: RecipeRepository,
    V: ReviewRepository,
{
    async fn can_edit_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<bool, CoreError> {
        self.evaluate(&identity, "edit", PermissionTarget::Recipe(recipe_id))
            .await
    }

    async fn can_delete_recipe(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<bool, CoreError> {
        self.evaluate(&identity, "delete", PermissionTarget::Recipe(recipe_id))
            .await
    }
}
