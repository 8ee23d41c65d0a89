use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/members", get(handlers::get_roster))
        .route("/api/members/:category", get(handlers::get_category))
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
}
