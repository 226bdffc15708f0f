use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    get,
    path = "/search/{name}/rating/{minimum}",
    tag = "recipe",
    summary = "Search recipes by name and minimum rating",
    description = "Substring match on recipe names, keeping recipes rated at or above the minimum.",
    params(
        ("name" = String, Path, description = "Name fragment to match"),
        ("minimum" = i64, Path, description = "Minimum difficulty rating"),
    ),
    responses(
        (status = 200, body = Vec<Recipe>),
        (status = 404, description = "No recipe matched")
    )
)]
pub async fn search_recipes_by_rating(
    Path((name, minimum)): Path<(String, i64)>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state
        .service
        .search_recipes_by_name_and_rating(name, minimum)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(recipes))
}
