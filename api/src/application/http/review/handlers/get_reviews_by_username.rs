use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::review::entities::Review;
use ladle_core::domain::review::ports::ReviewService;

#[utoipa::path(
    get,
    path = "/user/{username}",
    tag = "review",
    summary = "List reviews by author",
    params(
        ("username" = String, Path, description = "Review author username"),
    ),
    responses(
        (status = 200, body = Vec<Review>),
        (status = 404, description = "No reviews by that username")
    )
)]
pub async fn get_reviews_by_username(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = state
        .service
        .get_reviews_by_username(username)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(reviews))
}
