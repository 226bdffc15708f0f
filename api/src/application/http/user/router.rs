use super::handlers::get_user::{__path_get_user, get_user};
use super::handlers::register_user::{__path_register_user, register_user};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(register_user, get_user))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(register_user),
        )
        .route(
            &format!("{}/users/{{username}}", state.args.server.root_path),
            get(get_user),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
