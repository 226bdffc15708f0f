use crate::application::auth::OptionalIdentity;
use crate::application::http::recipe::validators::CreateRecipeValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use ladle_core::domain::recipe::entities::recipe::Recipe;
use ladle_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Create recipe",
    description = "Creates a new recipe. Anonymous callers are accepted; an authenticated caller becomes the recipe's author.",
    request_body = CreateRecipeValidator,
    responses(
        (status = 201, body = Recipe),
        (status = 400, description = "Structurally incomplete recipe")
    )
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = state
        .service
        .create_recipe(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    let location = recipe.location.clone().unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(recipe),
    ))
}
