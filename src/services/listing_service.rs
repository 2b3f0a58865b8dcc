// Listing service: paginated short views for transactions, blocks and validators

use crate::db::{LedgerReader, LedgerStore};
use crate::error::ExplorerResult;
use crate::models::{
    BlockInfoShort, PaginationParams, TxInfoShort, ValidatorFilter, ValidatorInfoShort,
};
use crate::services::BlockchainInfoService;

impl<S: LedgerStore> BlockchainInfoService<S> {
    /// Get one page of transactions, newest first
    pub async fn get_txs(&self, limit: u64, page: u64) -> ExplorerResult<Vec<TxInfoShort>> {
        let pagination = PaginationParams::new(limit, page).normalized(self.max_page_limit);
        let reader = self.store.begin_read().await?;
        let txs = reader.transactions_page(&pagination).await?;
        Ok(txs.into_iter().map(TxInfoShort::from).collect())
    }

    /// Get one page of blocks, highest number first
    pub async fn get_blocks(&self, limit: u64, page: u64) -> ExplorerResult<Vec<BlockInfoShort>> {
        let pagination = PaginationParams::new(limit, page).normalized(self.max_page_limit);
        let reader = self.store.begin_read().await?;
        let blocks = reader.blocks_page(&pagination).await?;
        Ok(blocks.into_iter().map(BlockInfoShort::from).collect())
    }

    /// Get every live validator
    pub async fn get_validators(&self) -> ExplorerResult<Vec<ValidatorInfoShort>> {
        let reader = self.store.begin_read().await?;
        let validators = reader.validators(&ValidatorFilter::default()).await?;
        Ok(validators.into_iter().map(ValidatorInfoShort::from).collect())
    }
}
