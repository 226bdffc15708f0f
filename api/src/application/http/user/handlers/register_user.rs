use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::RegisterUserValidator;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ladle_core::domain::user::entities::User;
use ladle_core::domain::user::ports::UserService;
use ladle_core::domain::user::value_objects::RegisterUserInput;

#[utoipa::path(
    post,
    path = "",
    tag = "user",
    summary = "Register user",
    description = "Creates an account. New accounts always start active with the USER role; the password never appears in responses.",
    request_body = RegisterUserValidator,
    responses(
        (status = 201, body = User),
        (status = 400, description = "Missing or too-short password, or duplicate username/email")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterUserValidator>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .service
        .register_user(RegisterUserInput {
            username: payload.username,
            password: payload.password,
            email: payload.user_meta.email,
            name: payload.user_meta.name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(user)))
}
