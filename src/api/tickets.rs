use crate::services::ticketing;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

pub async fn create_ticket(State(state): State<AppState>, Json(body): Json<Value>) -> impl IntoResponse {
    match ticketing::create_ticket(body) {
        Ok(ticket) => {
            state.logger.log("TICKET_CREATED", &ticket.number);
            Json(ticket).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
