use agent_portal::domain::logger::EventLogger;
use agent_portal::state::AppState;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

struct NullLogger;

impl EventLogger for NullLogger {
    fn log(&self, _event: &str, _detail: &str) {}
}

/// Serve the app on an ephemeral port rooted at `data_dir`, return its base URL.
async fn spawn_server(data_dir: &Path) -> String {
    let state = AppState::new(data_dir, Arc::new(NullLogger));
    let app = agent_portal::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let res = reqwest::get(format!("{}/health", base))
        .await
        .expect("Failed to send request");
    assert!(res.status().is_success());
    assert_eq!(res.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_missing_store_files_read_empty() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let logs: Value = reqwest::get(format!("{}/api/actions", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(logs, json!({"logs": []}));

    let agents: Value = reqwest::get(format!("{}/api/agents", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(agents, json!({"agents": []}));
}

#[tokio::test]
async fn test_legacy_handler_serves_logs_and_rejects_non_get() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("agent-action-log.json"), r#"[{"id":1}]"#).unwrap();
    let base = spawn_server(dir.path()).await;

    let res = reqwest::get(format!("{}/api/agent-action-log", base))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"logs": [{"id": 1}]}));

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/agent-action-log", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_malformed_store_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("agents-config.json"), "{not json").unwrap();
    let base = spawn_server(dir.path()).await;

    let body: Value = reqwest::get(format!("{}/api/agents", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"agents": []}));
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("agent-action-log.json"),
        r#"[{"id":1},{"id":2}]"#,
    )
    .unwrap();
    let base = spawn_server(dir.path()).await;

    let first: Value = reqwest::get(format!("{}/api/actions", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(format!("{}/api/actions", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(first["logs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ticket_creation_stub() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let payload = json!({"short_description": "agent offline", "priority": 2});
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/tickets", base))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    let number = body["number"].as_str().expect("number field");
    assert!(number.starts_with("INC"));
    assert_eq!(number.len(), 9);
    assert!(number[3..].chars().all(|c| c.is_ascii_digit()));
    assert!(body["url"].as_str().unwrap().contains(number));
    assert_eq!(body["body"], payload);
}

#[tokio::test]
async fn test_system_status() {
    let dir = tempfile::tempdir().unwrap();
    let base = spawn_server(dir.path()).await;

    let body: Value = reqwest::get(format!("{}/api/status", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body["uptime"].is_string());
    assert!(body["cpu"].is_string());
    assert!(body["ram"].is_string());
}
