/// Server setup and initialization
///
/// Wires together the database and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{
        create_client_routes, create_event_routes, create_project_routes, create_task_routes,
        AppState,
    },
    config::Config,
    store::Database,
};
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

/// Create the main Axum application with all routes and middleware
///
/// Opens the database (creating tables when absent) and mounts every endpoint.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🗄️ Initializing database: {}", config.database.path);
    let db = Database::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open database: {}", e))?;

    Ok(build_router(AppState { db }))
}

/// Build the router around an already opened database
pub fn build_router(state: AppState) -> Router {
    tracing::info!("📡 Creating HTTP router with all endpoints");

    Router::new()
        .route("/", get(read_root))
        .route("/healthz", get(health_check))
        .merge(create_client_routes())
        .merge(create_project_routes())
        .merge(create_task_routes())
        .merge(create_event_routes())
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and starts the Axum server on the configured address and port.
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting ProjectFlow server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// GET /
async fn read_root() -> Json<Value> {
    Json(json!({ "message": "ProjectFlow API is running 🚀" }))
}

/// Liveness probe
async fn health_check() -> &'static str {
    "ok"
}
