use serde_json::Value;

/// Read-only view over one of the flat JSON store files. Implementations are
/// fail-soft: a missing or unreadable store reads as empty, never as an error.
pub trait RecordStore: Send + Sync {
    fn read_all(&self) -> Vec<Value>;
}
