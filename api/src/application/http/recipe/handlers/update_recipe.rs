use crate::application::auth::RequiredIdentity;
use crate::application::http::recipe::validators::UpdateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use ladle_core::domain::common::entities::app_errors::CoreError;
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    patch,
    path = "",
    tag = "recipe",
    summary = "Update recipe",
    description = "Replaces a recipe; the body carries the id. Only the recipe's author or an admin may edit it.",
    request_body = UpdateRecipeValidator,
    responses(
        (status = 200, body = Recipe),
        (status = 400, description = "Unknown id or structurally incomplete recipe"),
        (status = 403, description = "Caller does not own the recipe")
    )
)]
pub async fn update_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateRecipeValidator>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state
        .service
        .update_recipe(identity, payload.into())
        .await
        // This endpoint answers 400, not 404, on a missing recipe.
        .map_err(|e| match e {
            CoreError::NotFound(message) => ApiError::BadRequest(message),
            other => ApiError::from(other),
        })?;

    Ok(Json(recipe))
}
