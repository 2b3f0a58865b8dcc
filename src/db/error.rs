// Error types for ledger store operations

use thiserror::Error;

/// Error types for ledger store connection, read scope and query operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error occurred during database connection attempt
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// A read scope could not be opened against the ledger
    #[error("Read scope error: {0}")]
    ScopeError(String),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    QueryError(String),
}

impl From<sea_orm::DbErr> for DbError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => DbError::ConnectionError(e.to_string()),
            other => DbError::QueryError(other.to_string()),
        }
    }
}
