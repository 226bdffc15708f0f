use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use ladle_core::domain::common::entities::app_errors::CoreError;
use ladle_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "recipe",
    summary = "Delete recipe",
    description = "Deletes a recipe. Only the recipe's author or an admin may delete it.",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, description = "Confirmation text"),
        (status = 400, description = "No recipe with that id"),
        (status = 403, description = "Caller does not own the recipe")
    )
)]
pub async fn delete_recipe(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<String, ApiError> {
    let recipe = state
        .service
        .delete_recipe_by_id(identity, id)
        .await
        // This endpoint answers 400, not 404, on a missing recipe.
        .map_err(|e| match e {
            CoreError::NotFound(message) => ApiError::BadRequest(message),
            other => ApiError::from(other),
        })?;

    Ok(format!(
        "The recipe with ID {} and name {} was deleted.",
        recipe.id, recipe.name
    ))
}
