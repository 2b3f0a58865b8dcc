use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplorerError {
    /// The queried key has no matching record
    #[error("{0}")]
    NotFound(String),
    /// Ledger content violates an invariant the reconstruction relies on.
    /// Not retriable: it points at corrupted ingestion.
    #[error("Data integrity fault: {0}")]
    DataIntegrity(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

impl ExplorerError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ExplorerError::NotFound(message.into())
    }

    /// Builds an integrity fault and logs it, since it always needs operator attention
    pub fn data_integrity(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("Ledger data integrity fault: {}", message);
        ExplorerError::DataIntegrity(message)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::NotFound(_))
    }

    /// Human-readable alerts suitable for direct display
    pub fn messages(&self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ExplorerError::NotFound(_) => StatusCode::NOT_FOUND,
            ExplorerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ExplorerError::DataIntegrity(_) | ExplorerError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string(),
            "alerts": self.messages(),
        }));

        (status, body).into_response()
    }
}

// DbError to ExplorerError conversion implementation
impl From<DbError> for ExplorerError {
    fn from(err: DbError) -> Self {
        tracing::warn!("Ledger store failure: {}", err);
        ExplorerError::DatabaseError(err.to_string())
    }
}
