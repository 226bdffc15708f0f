use axum::{Router, http::StatusCode, routing::get};

use crate::application::http::server::app_state::AppState;

async fn health() -> StatusCode {
    StatusCode::OK
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}
