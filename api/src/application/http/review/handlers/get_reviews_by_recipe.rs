use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::review::entities::Review;
use ladle_core::domain::review::ports::ReviewService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/recipe/{recipe_id}",
    tag = "review",
    summary = "List reviews for a recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = Vec<Review>),
        (status = 404, description = "Recipe missing or has no reviews")
    )
)]
pub async fn get_reviews_by_recipe(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state
        .service
        .get_reviews_by_recipe_id(recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(reviews))
}
