// Handlers for the reconstructed entity views

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db::LedgerStore;
use crate::error::ExplorerResult;
use crate::handlers::AppState;
use crate::models::{AccountInfo, AssetInfo, EquivocationInfo, ValidatorInfo};

/// Handler for GET /equivocation/{proof_hash}
pub async fn get_equivocation_info<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Path(proof_hash): Path<String>,
) -> ExplorerResult<Json<EquivocationInfo>> {
    state.get_equivocation_info(&proof_hash).await.map(Json)
}

/// Handler for GET /account/{hash}
pub async fn get_account_info<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Path(hash): Path<String>,
) -> ExplorerResult<Json<AccountInfo>> {
    state.get_account_info(&hash).await.map(Json)
}

/// Handler for GET /asset/{hash}
pub async fn get_asset_info<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Path(hash): Path<String>,
) -> ExplorerResult<Json<AssetInfo>> {
    state.get_asset_info(&hash).await.map(Json)
}

/// Handler for GET /validator/{address}
pub async fn get_validator_info<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Path(address): Path<String>,
) -> ExplorerResult<Json<ValidatorInfo>> {
    state.get_validator_info(&address).await.map(Json)
}
