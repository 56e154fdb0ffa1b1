pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pipeline::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/rex/reports", post(handlers::handle_create_report))
        .route("/api/v1/rex/preview", post(handlers::handle_preview))
        .route("/api/v1/rex/render", post(handlers::handle_render))
        .with_state(state)
}
