// Handlers Module
// Thin axum handlers over `BlockchainInfoService`; all logic lives in the services.

pub mod health;
pub mod info;
pub mod listings;
pub mod search;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, Router};
use tower_http::timeout::TimeoutLayer;

use crate::db::LedgerStore;
use crate::services::BlockchainInfoService;

// Type alias for the application state
pub type AppState<S> = Arc<BlockchainInfoService<S>>;

/// Builds the API routes over any ledger store
pub fn router<S: LedgerStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::health_check::<S>))
        .route(
            "/equivocation/{proof_hash}",
            get(info::get_equivocation_info::<S>),
        )
        .route("/account/{hash}", get(info::get_account_info::<S>))
        .route("/asset/{hash}", get(info::get_asset_info::<S>))
        .route("/validator/{address}", get(info::get_validator_info::<S>))
        .route("/txs", get(listings::get_txs::<S>))
        .route("/blocks", get(listings::get_blocks::<S>))
        .route("/validators", get(listings::get_validators::<S>))
        .route("/search/{hash}", get(search::search::<S>))
        .with_state(state)
}

/// Answers 408 when a request outlives `timeout`
pub fn request_timeout(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
