use crate::application::http::review::validators::PostReviewValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::review::ports::ReviewService;
use ladle_core::domain::review::value_objects::PostReviewInput;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/{recipe_id}",
    tag = "review",
    summary = "Post review",
    description = "Attaches a review to a recipe and returns the recipe. The average score shows up on the next read.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    request_body = PostReviewValidator,
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "Rating out of range"),
        (status = 404, description = "No recipe with that id")
    )
)]
pub async fn post_review(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PostReviewValidator>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = state
        .service
        .post_review(PostReviewInput {
            recipe_id,
            username: payload.username,
            rating: payload.rating,
            description: payload.description,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(recipe)))
}
