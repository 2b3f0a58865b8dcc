// Search dispatch, resolving an opaque string to the first entity kind it matches
//
// Probe order: address, account, asset, transaction, equivocation, then block
// number when the string parses as an integer. A string matching several kinds
// always resolves to the earliest one.

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{EntityProbe, SearchResult};
use crate::services::BlockchainInfoService;

/// Existence probes for `hash`, in priority order
pub fn search_probes(hash: &str) -> Vec<EntityProbe> {
    let mut probes = vec![
        EntityProbe::Address(hash.to_string()),
        EntityProbe::Account(hash.to_string()),
        EntityProbe::Asset(hash.to_string()),
        EntityProbe::Transaction(hash.to_string()),
        EntityProbe::Equivocation(hash.to_string()),
    ];
    if let Ok(number) = hash.parse::<i64>() {
        probes.push(EntityProbe::Block(number));
    }
    probes
}

impl<S: LedgerStore> BlockchainInfoService<S> {
    pub async fn search(&self, hash: &str) -> ExplorerResult<SearchResult> {
        let Some(probe) = self.first_match(hash).await? else {
            tracing::debug!("Search for {} matched nothing", hash);
            return Err(ExplorerError::not_found("Not found."));
        };
        tracing::debug!("Search for {} matched {:?}", hash, probe);

        // Resolver failures are handed back unchanged
        match probe {
            EntityProbe::Address(address) => self
                .address_info
                .get_address_info(&address)
                .await
                .map(SearchResult::Address),
            EntityProbe::Account(hash) => self.get_account_info(&hash).await.map(SearchResult::Account),
            EntityProbe::Asset(hash) => self.get_asset_info(&hash).await.map(SearchResult::Asset),
            EntityProbe::Transaction(hash) => self
                .tx_info
                .get_tx_info(&hash)
                .await
                .map(SearchResult::Transaction),
            EntityProbe::Equivocation(proof_hash) => self
                .get_equivocation_info(&proof_hash)
                .await
                .map(SearchResult::Equivocation),
            EntityProbe::Block(number) => self
                .block_info
                .get_block_info(number)
                .await
                .map(SearchResult::Block),
        }
    }

    /// Runs the probes inside one read scope and returns the first hit
    async fn first_match(&self, hash: &str) -> ExplorerResult<Option<EntityProbe>> {
        let reader = self.store.begin_read().await?;
        for probe in search_probes(hash) {
            if reader.exists(&probe).await? {
                return Ok(Some(probe));
            }
        }
        Ok(None)
    }
}
