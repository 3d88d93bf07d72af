//! # Storage Error Types
//!
//! Error types for local storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite error / bad JSON                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sqlx::Error, serde_json::Error                                        │
//! │       │                                                                 │
//! │       ▼  (From impls)                                                   │
//! │  DbError (this file)                                                   │
//! │       │                                                                 │
//! │       ├── at load time: logged, seed data used instead                 │
//! │       │                                                                 │
//! │       ▼  at save time                                                   │
//! │  ApiError (agri-app) → renderer                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local storage errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Opening the storage file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory missing or not writable
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A stored value could not be encoded or decoded.
    ///
    /// ## When This Occurs
    /// - Storage edited by hand and no longer valid JSON
    /// - A record's shape changed between versions
    #[error("Serialization failed for '{key}': {message}")]
    Serialization { key: String, message: String },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    pub fn serialization(key: impl Into<String>, err: serde_json::Error) -> Self {
        DbError::Serialization {
            key: key.into(),
            message: err.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
