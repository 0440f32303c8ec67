/// Configuration management for the ProjectFlow service
///
/// Handles server bind settings and the SQLite store location.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// Relational store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database file (default: "data/projectflow.db").
    /// The file and its parent directory are created when missing.
    pub path: String,
    /// Upper bound on pooled connections, i.e. concurrent request sessions
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Store configuration rooted at an explicit file path
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
        }
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("PROJECTFLOW_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("PROJECTFLOW_PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
            },
            database: DatabaseConfig {
                path: std::env::var("PROJECTFLOW_DB_PATH")
                    .unwrap_or_else(|_| "data/projectflow.db".to_string()),
                max_connections: std::env::var("PROJECTFLOW_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(5),
            },
        }
    }
}
