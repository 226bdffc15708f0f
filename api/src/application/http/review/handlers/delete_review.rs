use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::common::entities::app_errors::CoreError;
use ladle_core::domain::review::entities::Review;
use ladle_core::domain::review::ports::ReviewService;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "review",
    summary = "Delete review",
    description = "Deletes a review. Only the review's author or an admin may delete it.",
    params(
        ("id" = Uuid, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, body = Review),
        (status = 400, description = "No review with that id"),
        (status = 403, description = "Caller does not own the review")
    )
)]
pub async fn delete_review(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .service
        .delete_review_by_id(identity, id)
        .await
        // This endpoint answers 400, not 404, on a missing review.
        .map_err(|e| match e {
            CoreError::NotFound(message) => ApiError::BadRequest(message),
            other => ApiError::from(other),
        })?;

    Ok(Json(review))
}
