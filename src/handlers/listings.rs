// Handlers for the paginated listings

use axum::{
    extract::{Query, State},
    Json,
};

use crate::db::LedgerStore;
use crate::error::ExplorerResult;
use crate::handlers::AppState;
use crate::models::{BlockInfoShort, PaginationParams, TxInfoShort, ValidatorInfoShort};

/// Handler for GET /txs - Returns one page of transactions
pub async fn get_txs<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<PaginationParams>,
) -> ExplorerResult<Json<Vec<TxInfoShort>>> {
    state.get_txs(params.limit, params.page).await.map(Json)
}

/// Handler for GET /blocks - Returns one page of blocks
pub async fn get_blocks<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<PaginationParams>,
) -> ExplorerResult<Json<Vec<BlockInfoShort>>> {
    state.get_blocks(params.limit, params.page).await.map(Json)
}

/// Handler for GET /validators - Returns all live validators
pub async fn get_validators<S: LedgerStore>(
    State(state): State<AppState<S>>,
) -> ExplorerResult<Json<Vec<ValidatorInfoShort>>> {
    state.get_validators().await.map(Json)
}
