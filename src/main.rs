use agent_portal::domain::logger::EventLogger;
use agent_portal::infrastructure::file_logger::FileLogger;
use agent_portal::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let logger = Arc::new(FileLogger::new("server.log").expect("Unable to open log file"));
    let app_state = AppState::new(&data_dir, logger.clone());
    logger.log("STARTUP", &data_dir.display().to_string());

    let app = agent_portal::router(app_state).layer({
        // Read allowed origins from env
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<String>>();

        if allowed_origins.is_empty() {
            println!("WARNING: ALLOWED_ORIGINS not set. Defaulting to permissive CORS.");
            CorsLayer::permissive()
        } else {
            use axum::http::HeaderValue;
            use axum::http::Method;

            let origins: Vec<HeaderValue> = allowed_origins
                .iter()
                .filter_map(|s| s.parse::<HeaderValue>().ok())
                .collect();

            println!("Configuring CORS for origins: {:?}", allowed_origins);

            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(tower_http::cors::Any)
        }
    });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Unable to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
