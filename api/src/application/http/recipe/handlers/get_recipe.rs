use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "recipe",
    summary = "Get recipe",
    description = "Retrieves one recipe by id, with its average review score and canonical location.",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = Recipe),
        (status = 404, description = "No recipe with that id")
    )
)]
pub async fn get_recipe(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Recipe>, ApiError> {
    let recipe = state
        .service
        .get_recipe_by_id(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(recipe))
}
