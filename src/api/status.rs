use crate::domain::SystemMetrics;
use crate::state::AppState;
use axum::{extract::State, response::Json};

pub async fn get_system_status(State(state): State<AppState>) -> Json<SystemMetrics> {
    Json(state.get_system_metrics())
}
