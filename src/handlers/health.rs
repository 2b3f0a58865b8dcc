// Health check endpoint handler implementation

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::db::LedgerStore;
use crate::handlers::AppState;
use crate::services::health::HealthChecker;

/// Handler for GET /health - Reports whether the ledger can be read
pub async fn health_check<S: LedgerStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    if HealthChecker::new(state.store()).check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
    }
}
