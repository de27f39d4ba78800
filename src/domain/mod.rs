use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod logger;
pub mod repositories;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub uptime: String,
    pub cpu: String,
    pub ram: String,
}

/// Envelope for the agent action log endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<Value>,
}

/// Envelope for the agents roster endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentsResponse {
    pub agents: Vec<Value>,
}

/// Response of the simulated ServiceNow ticket endpoint. `body` echoes the
/// payload the caller posted, untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub number: String,
    pub url: String,
    pub body: Value,
}
