use super::handlers::create_recipe::{__path_create_recipe, create_recipe};
use super::handlers::delete_recipe::{__path_delete_recipe, delete_recipe};
use super::handlers::get_all_recipes::{__path_get_all_recipes, get_all_recipes};
use super::handlers::get_recipe::{__path_get_recipe, get_recipe};
use super::handlers::search_recipes::{__path_search_recipes, search_recipes};
use super::handlers::search_recipes_by_rating::{
    __path_search_recipes_by_rating, search_recipes_by_rating,
};
use super::handlers::update_recipe::{__path_update_recipe, update_recipe};
use crate::application::{auth::auth, http::server::app_state::AppState};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_recipe,
    get_recipe,
    get_all_recipes,
    search_recipes,
    search_recipes_by_rating,
    delete_recipe,
    update_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes", state.args.server.root_path),
            post(create_recipe).get(get_all_recipes).patch(update_recipe),
        )
        .route(
            &format!("{}/recipes/{{id}}", state.args.server.root_path),
            get(get_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/search/{{name}}", state.args.server.root_path),
            get(search_recipes),
        )
        .route(
            &format!(
                "{}/recipes/search/{{name}}/rating/{{minimum}}",
                state.args.server.root_path
            ),
            get(search_recipes_by_rating),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
