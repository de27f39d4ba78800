//! Legacy access path to the agent action log.
//!
//! Predates the `RecordStore` handles on `AppState`; the legacy HTTP handler
//! still calls straight through here. Kept until that handler is retired.

use crate::repositories::record_store::{read_records, AGENT_ACTION_LOG_FILE};
use serde_json::Value;
use std::path::Path;

pub fn fetch_actions(data_dir: &Path) -> Vec<Value> {
    read_records(&data_dir.join(AGENT_ACTION_LOG_FILE))
}
