use crate::domain::AgentsResponse;
use crate::state::AppState;
use axum::{extract::State, response::Json};

pub async fn get_agents(State(state): State<AppState>) -> Json<AgentsResponse> {
    Json(AgentsResponse {
        agents: state.agents_config.read_all(),
    })
}
