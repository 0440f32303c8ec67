/// ProjectFlow server entry point
///
/// Loads configuration from the environment and starts the HTTP server:
/// - Create/list endpoints at /clients, /projects, /tasks, /events
/// - Status message at /
/// - Health check at /healthz

use projectflow::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (defaults to 0.0.0.0:8000 and data/projectflow.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
