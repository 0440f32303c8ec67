/// HTTP API Layer
///
/// REST endpoints for the four record types. Each resource exposes:
/// - POST to create one record
/// - GET to list every record

use crate::store::Database;

// Client endpoints
pub mod clients;

// Project endpoints
pub mod projects;

// Task endpoints
pub mod tasks;

// Event endpoints
pub mod events;

// Error taxonomy and JSON error responses
pub mod error;

pub use clients::create_client_routes;
pub use error::ApiError;
pub use events::create_event_routes;
pub use projects::create_project_routes;
pub use tasks::create_task_routes;

/// Application state shared by every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled database handle; each request borrows its own session
    pub db: Database,
}
