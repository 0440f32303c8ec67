/// SQLite database handle and schema bootstrap
///
/// One pool per process. Every request borrows a single connection from it
/// as a [`Session`] and gives it back on drop.

use crate::config::DatabaseConfig;
use crate::store::{error::StoreResult, session::Session};
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Pooled handle to the project-management database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if missing) the database file and ensure the schema exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_path = Path::new(&config.path);
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!("Failed to create database directory '{}': {}", parent.display(), e)
            })?;
        }

        tracing::info!("🗄️ Opening database pool: {}", db_path.display());

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_with(options)
            .await?;

        let database = Self { pool };
        database.init_schema().await?;

        tracing::info!("✅ Database ready: {}", db_path.display());

        Ok(database)
    }

    /// Borrow one connection for the duration of a request
    pub async fn session(&self) -> StoreResult<Session> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create tables and foreign-key indexes
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS). Existing tables are never altered.
    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS clients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(255) NOT NULL,
                contact VARCHAR(255),
                notes TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(255) NOT NULL,
                "type" VARCHAR(100),
                status VARCHAR(50) NOT NULL DEFAULT 'ACTIVE',
                deadline DATETIME,
                client_id INTEGER REFERENCES clients(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(255) NOT NULL,
                description TEXT,
                status VARCHAR(50) NOT NULL DEFAULT 'BACKLOG',
                priority VARCHAR(50) NOT NULL DEFAULT 'MEDIUM',
                assignee VARCHAR(255),
                due_date DATETIME,
                project_id INTEGER NOT NULL REFERENCES projects(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title VARCHAR(255) NOT NULL,
                date DATETIME NOT NULL,
                location VARCHAR(255),
                link VARCHAR(500),
                status VARCHAR(50) NOT NULL DEFAULT 'SCHEDULED',
                project_id INTEGER REFERENCES projects(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_client_id ON projects(client_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON tasks(project_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_events_project_id ON events(project_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
