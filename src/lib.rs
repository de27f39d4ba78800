pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{any, get, post},
    Router,
};
use state::AppState;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health_check))
        // Old dashboard path, handler does its own method check
        .route("/api/agent-action-log", any(api::actions::legacy_get_actions))
        .route("/api/actions", get(api::actions::get_actions))
        .route("/api/agents", get(api::agents::get_agents))
        .route("/api/tickets", post(api::tickets::create_ticket))
        .route("/api/status", get(api::status::get_system_status))
        .with_state(app_state)
}
