use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List recipes",
    description = "Lists every recipe. An empty store is reported as a 404 with a message rather than an empty array.",
    responses(
        (status = 200, body = Vec<Recipe>),
        (status = 404, description = "No recipes exist yet")
    )
)]
pub async fn get_all_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state
        .service
        .get_all_recipes()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(recipes))
}
