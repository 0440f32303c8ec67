/// Persistence gateway
///
/// Owns the SQLite pool and hands out request-scoped sessions:
/// - Schema bootstrap (tables created idempotently at startup)
/// - Single-row inserts returning the stored row
/// - Full-table reads and foreign-key lookups

pub mod database;
pub mod error;
pub mod session;

pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use session::Session;
