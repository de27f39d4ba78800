use crate::domain::repositories::RecordStore;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Well-known store file names, resolved against the data directory.
pub const AGENT_ACTION_LOG_FILE: &str = "agent-action-log.json";
pub const AGENTS_CONFIG_FILE: &str = "agents-config.json";

/// Read one of the flat JSON store files as an array of opaque records.
///
/// Every failure mode collapses to an empty vec: missing file, unreadable
/// file, malformed JSON, or valid JSON that is not an array. The consuming
/// dashboard treats an empty list as a normal state, so nothing is surfaced
/// or logged here. No write path exists; the files are produced elsewhere.
pub fn read_records(path: &Path) -> Vec<Value> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };
    serde_json::from_str::<Vec<Value>>(&content).unwrap_or_default()
}

/// [`RecordStore`] backed by a single JSON file on disk.
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(data_dir: &Path, file_name: &str) -> Self {
        Self {
            path: data_dir.join(file_name),
        }
    }
}

impl RecordStore for FileRecordStore {
    fn read_all(&self) -> Vec<Value> {
        read_records(&self.path)
    }
}
