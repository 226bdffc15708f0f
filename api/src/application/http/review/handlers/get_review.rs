use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::review::entities::Review;
use ladle_core::domain::review::ports::ReviewService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "review",
    summary = "Get review",
    params(
        ("id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = Review),
        (status = 404, description = "No review with that id")
    )
)]
pub async fn get_review(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .service
        .get_review_by_id(id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(review))
}
