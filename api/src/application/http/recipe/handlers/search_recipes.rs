use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    get,
    path = "/search/{name}",
    tag = "recipe",
    summary = "Search recipes by name",
    description = "Substring match on recipe names.",
    params(
        ("name" = String, Path, description = "Name fragment to match"),
    ),
    responses(
        (status = 200, body = Vec<Recipe>),
        (status = 404, description = "No recipe name matched")
    )
)]
pub async fn search_recipes(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state
        .service
        .search_recipes_by_name(name)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(recipes))
}
