/// ProjectFlow: minimal project-management record keeper
///
/// Clients, projects, tasks and events, created and listed over a JSON HTTP API
/// and stored in SQLite.

// Core configuration and setup
pub mod config;

// Record types: create payloads, candidate rows and persisted rows
pub mod model;

// Persistence gateway - SQLite pool, schema bootstrap and request sessions
pub mod store;

// HTTP API layer - create/list endpoints per record type
pub mod api;

// Server setup and initialization
pub mod server;

pub use model::{Client, Event, Project, Task};
pub use server::{build_router, create_app, start_server};
pub use store::Database;
