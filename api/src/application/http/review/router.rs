use super::handlers::delete_review::{__path_delete_review, delete_review};
use super::handlers::get_review::{__path_get_review, get_review};
use super::handlers::get_reviews_by_recipe::{__path_get_reviews_by_recipe, get_reviews_by_recipe};
use super::handlers::get_reviews_by_username::{
    __path_get_reviews_by_username, get_reviews_by_username,
};
use super::handlers::post_review::{__path_post_review, post_review};
use super::handlers::update_review::{__path_update_review, update_review};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_review,
    get_reviews_by_recipe,
    get_reviews_by_username,
    post_review,
    update_review,
    delete_review
))]
pub struct ReviewApiDoc;

pub fn review_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/reviews", state.args.server.root_path),
            patch(update_review),
        )
        .route(
            &format!("{}/reviews/{{id}}", state.args.server.root_path),
            get(get_review).post(post_review).delete(delete_review),
        )
        .route(
            &format!("{}/reviews/recipe/{{recipe_id}}", state.args.server.root_path),
            get(get_reviews_by_recipe),
        )
        .route(
            &format!("{}/reviews/user/{{username}}", state.args.server.root_path),
            get(get_reviews_by_username),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
