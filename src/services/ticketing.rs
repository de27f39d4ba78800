//! Simulated ServiceNow ticket creation. No network call is made; the ticket
//! number is random and the posted body is echoed back for the UI to render.

use crate::domain::TicketRecord;
use rand::Rng;
use serde_json::Value;
use std::env;
use std::error::Error;

pub fn create_ticket(body: Value) -> Result<TicketRecord, Box<dyn Error + Send + Sync>> {
    let number = format!("INC{:06}", rand::rng().random_range(0..1_000_000u32));
    let instance = env::var("SERVICENOW_INSTANCE").unwrap_or_else(|_| "example".to_string());
    let url = format!(
        "https://{}.service-now.com/nav_to.do?uri=incident.do?number={}",
        instance, number
    );

    Ok(TicketRecord { number, url, body })
}
