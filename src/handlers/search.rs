// Search endpoint handler
// Surrounding whitespace is trimmed here; the service matches strings verbatim.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::db::LedgerStore;
use crate::error::{ExplorerError, ExplorerResult};
use crate::handlers::AppState;
use crate::models::SearchResult;

/// Handler for GET /search/{hash}
pub async fn search<S: LedgerStore>(
    State(state): State<AppState<S>>,
    Path(hash): Path<String>,
) -> ExplorerResult<Json<SearchResult>> {
    let hash = hash.trim();
    if hash.is_empty() {
        return Err(ExplorerError::InvalidRequest(
            "Search string is empty.".to_string(),
        ));
    }
    state.search(hash).await.map(Json)
}
