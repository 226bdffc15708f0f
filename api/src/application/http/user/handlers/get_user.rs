use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use ladle_core::domain::user::entities::User;
use ladle_core::domain::user::ports::UserService;

#[utoipa::path(
    get,
    path = "/{username}",
    tag = "user",
    summary = "Get user",
    params(
        ("username" = String, Path, description = "Username"),
    ),
    responses(
        (status = 200, body = User),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "No user with that username")
    )
)]
pub async fn get_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Json<User>, ApiError> {
    let user = state
        .service
        .get_user_by_username(username)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(user))
}
