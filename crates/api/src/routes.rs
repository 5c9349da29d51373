use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::records::routes())
        .with_state(state)
}
