pub mod health;

use axum::{routing::get, Router};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze-user", get(handlers::handle_analyze_user))
        .with_state(state)
}
