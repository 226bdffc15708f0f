use crate::application::auth::RequiredIdentity;
use crate::application::http::review::validators::UpdateReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use ladle_core::domain::common::entities::app_errors::CoreError;
use ladle_core::domain::review::entities::Review;
use ladle_core::domain::review::ports::ReviewService;
use ladle_core::domain::review::value_objects::UpdateReviewInput;

#[utoipa::path(
    patch,
    path = "",
    tag = "review",
    summary = "Update review",
    description = "Replaces a review; the body carries the id. Only the review's author or an admin may edit it.",
    request_body = UpdateReviewValidator,
    responses(
        (status = 200, body = Review),
        (status = 400, description = "Unknown id or rating out of range"),
        (status = 403, description = "Caller does not own the review")
    )
)]
pub async fn update_review(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateReviewValidator>,
) -> Result<Json<Review>, ApiError> {
    let review = state
        .service
        .update_review(
            identity,
            UpdateReviewInput {
                id: payload.id,
                username: payload.username,
                rating: payload.rating,
                description: payload.description,
                recipe_id: payload.recipe_id,
            },
        )
        .await
        // This endpoint answers 400, not 404, on a missing review.
        .map_err(|e| match e {
            CoreError::NotFound(message) => ApiError::BadRequest(message),
            other => ApiError::from(other),
        })?;

    Ok(Json(review))
}
