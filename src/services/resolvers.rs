// Address, transaction and block info resolvers used by search

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{AddressInfo, BlockInfo, TxInfo};

#[async_trait]
pub trait AddressInfoResolver: Send + Sync {
    async fn get_address_info(&self, blockchain_address: &str) -> ExplorerResult<AddressInfo>;
}

#[async_trait]
pub trait TxInfoResolver: Send + Sync {
    async fn get_tx_info(&self, tx_hash: &str) -> ExplorerResult<TxInfo>;
}

#[async_trait]
pub trait BlockInfoResolver: Send + Sync {
    async fn get_block_info(&self, block_number: i64) -> ExplorerResult<BlockInfo>;
}

/// Resolves address, transaction and block views straight from the ledger tables
pub struct LedgerInfoResolver<S> {
    store: Arc<S>,
}

impl<S: LedgerStore> LedgerInfoResolver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: LedgerStore> AddressInfoResolver for LedgerInfoResolver<S> {
    async fn get_address_info(&self, blockchain_address: &str) -> ExplorerResult<AddressInfo> {
        let reader = self.store.begin_read().await?;
        reader
            .address(blockchain_address)
            .await?
            .map(AddressInfo::from)
            .ok_or_else(|| {
                ExplorerError::not_found(format!("Address {} does not exist.", blockchain_address))
            })
    }
}

#[async_trait]
impl<S: LedgerStore> TxInfoResolver for LedgerInfoResolver<S> {
    async fn get_tx_info(&self, tx_hash: &str) -> ExplorerResult<TxInfo> {
        let reader = self.store.begin_read().await?;
        reader
            .transaction(tx_hash)
            .await?
            .map(TxInfo::from)
            .ok_or_else(|| ExplorerError::not_found(format!("Tx {} does not exist.", tx_hash)))
    }
}

#[async_trait]
impl<S: LedgerStore> BlockInfoResolver for LedgerInfoResolver<S> {
    async fn get_block_info(&self, block_number: i64) -> ExplorerResult<BlockInfo> {
        let reader = self.store.begin_read().await?;
        reader
            .block(block_number)
            .await?
            .map(BlockInfo::from)
            .ok_or_else(|| {
                ExplorerError::not_found(format!("Block {} does not exist.", block_number))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures::LedgerBuilder;

    #[tokio::test]
    async fn test_resolves_known_entities() {
        let store = Arc::new(
            LedgerBuilder::new()
                .address("CHxAlice")
                .block(12)
                .transaction("tx-1", "CHxAlice", 12)
                .into_store(),
        );
        let resolver = LedgerInfoResolver::new(store);

        let address = resolver.get_address_info("CHxAlice").await.unwrap();
        assert_eq!(address.blockchain_address, "CHxAlice");

        let tx = resolver.get_tx_info("tx-1").await.unwrap();
        assert_eq!(tx.block_number, 12);

        let block = resolver.get_block_info(12).await.unwrap();
        assert_eq!(block.block_number, 12);
    }

    #[tokio::test]
    async fn test_missing_entities_are_not_found() {
        let resolver = LedgerInfoResolver::new(Arc::new(LedgerBuilder::new().into_store()));

        let err = resolver.get_block_info(7).await.unwrap_err();
        assert_eq!(err, ExplorerError::NotFound("Block 7 does not exist.".to_string()));
        assert!(resolver.get_tx_info("nope").await.unwrap_err().is_not_found());
        assert!(resolver.get_address_info("nope").await.unwrap_err().is_not_found());
    }
}
