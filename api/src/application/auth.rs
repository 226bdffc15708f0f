use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use ladle_core::domain::authentication::{ports::AuthService, value_objects::Identity};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// HTTP Basic middleware. Credentials, when present, are verified and the
/// resolved [`Identity`] is attached to the request; requests without an
/// Authorization header pass through anonymously so public routes keep
/// working. Invalid credentials are rejected outright, even on public routes.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(Authorization(basic)) = req.headers().typed_get::<Authorization<Basic>>() {
        let identity = state
            .service
            .authenticate(basic.username().to_string(), basic.password().to_string())
            .await
            .map_err(ApiError::from)?;

        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Extractor for handlers that refuse anonymous access.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "Authentication required: provide HTTP Basic credentials".to_string(),
                )
            })
    }
}

/// Extractor for handlers that accept anonymous callers but use the identity
/// when one is present, such as recipe creation.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
