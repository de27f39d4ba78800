use crate::domain::LogsResponse;
use crate::services::action_log;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde_json::json;

/// Legacy handler for the action log. Mounted with `any()` and does its own
/// method dispatch; still live alongside [`get_actions`] while the dashboard
/// migrates off the old path.
pub async fn legacy_get_actions(method: Method, State(state): State<AppState>) -> impl IntoResponse {
    if method != Method::GET {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({"error": "Method not allowed"})),
        )
            .into_response();
    }

    let logs = action_log::fetch_actions(&state.data_dir);
    Json(LogsResponse { logs }).into_response()
}

/// Route-style handler: the router already guarantees GET.
pub async fn get_actions(State(state): State<AppState>) -> Json<LogsResponse> {
    Json(LogsResponse {
        logs: state.action_log.read_all(),
    })
}
