// SeaORM-backed ledger store
//
// Each read scope is a database transaction that is never committed; dropping the
// reader rolls it back and returns the connection to the pool.

mod asset_repository;
mod event_repository;
mod transaction_repository;
mod validator_repository;

pub use asset_repository::AssetRepository;
pub use event_repository::EventRepository;
pub use transaction_repository::TransactionRepository;
pub use validator_repository::ValidatorRepository;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::db::error::DbError;
use crate::db::store::{LedgerReader, LedgerStore};
use crate::models::{
    AccountRecord, AddressRecord, AssetRecord, BlockRecord, EntityProbe, EquivocationRecord,
    EventFilter, EventRecord, HoldingEligibilityRecord, HoldingScope, PaginationParams,
    TransactionRecord, ValidatorFilter, ValidatorRecord,
};

/// Ledger store over a pooled Postgres connection
#[derive(Clone)]
pub struct SeaOrmLedgerStore {
    conn: DatabaseConnection,
}

impl SeaOrmLedgerStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        SeaOrmLedgerStore { conn }
    }
}

#[async_trait]
impl LedgerStore for SeaOrmLedgerStore {
    type Reader = SeaOrmLedgerReader;

    async fn begin_read(&self) -> Result<Self::Reader, DbError> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|e| DbError::ScopeError(e.to_string()))?;
        Ok(SeaOrmLedgerReader { txn })
    }
}

/// One read scope, backed by an uncommitted transaction
pub struct SeaOrmLedgerReader {
    txn: DatabaseTransaction,
}

#[async_trait]
impl LedgerReader for SeaOrmLedgerReader {
    async fn events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, DbError> {
        EventRepository::new(&self.txn).find(filter).await
    }

    async fn account(&self, hash: &str) -> Result<Option<AccountRecord>, DbError> {
        AssetRepository::new(&self.txn).find_account(hash).await
    }

    async fn asset(&self, hash: &str) -> Result<Option<AssetRecord>, DbError> {
        AssetRepository::new(&self.txn).find_asset(hash).await
    }

    async fn equivocation(&self, proof_hash: &str) -> Result<Option<EquivocationRecord>, DbError> {
        ValidatorRepository::new(&self.txn)
            .find_equivocation(proof_hash)
            .await
    }

    async fn holding_eligibilities(
        &self,
        scope: &HoldingScope,
    ) -> Result<Vec<HoldingEligibilityRecord>, DbError> {
        AssetRepository::new(&self.txn)
            .find_holding_eligibilities(scope)
            .await
    }

    async fn validators(&self, filter: &ValidatorFilter) -> Result<Vec<ValidatorRecord>, DbError> {
        ValidatorRepository::new(&self.txn).find_live(filter).await
    }

    async fn address(&self, blockchain_address: &str) -> Result<Option<AddressRecord>, DbError> {
        TransactionRepository::new(&self.txn)
            .get_address(blockchain_address)
            .await
    }

    async fn transaction(&self, hash: &str) -> Result<Option<TransactionRecord>, DbError> {
        TransactionRepository::new(&self.txn).get_by_hash(hash).await
    }

    async fn block(&self, block_number: i64) -> Result<Option<BlockRecord>, DbError> {
        TransactionRepository::new(&self.txn)
            .get_block(block_number)
            .await
    }

    async fn transactions_page(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Vec<TransactionRecord>, DbError> {
        TransactionRepository::new(&self.txn)
            .get_paginated(pagination)
            .await
    }

    async fn blocks_page(&self, pagination: &PaginationParams) -> Result<Vec<BlockRecord>, DbError> {
        TransactionRepository::new(&self.txn)
            .get_blocks_paginated(pagination)
            .await
    }

    async fn exists(&self, probe: &EntityProbe) -> Result<bool, DbError> {
        match probe {
            EntityProbe::Address(address) => {
                TransactionRepository::new(&self.txn)
                    .address_exists(address)
                    .await
            }
            EntityProbe::Account(hash) => AssetRepository::new(&self.txn).account_exists(hash).await,
            EntityProbe::Asset(hash) => AssetRepository::new(&self.txn).asset_exists(hash).await,
            EntityProbe::Transaction(hash) => {
                TransactionRepository::new(&self.txn)
                    .transaction_exists(hash)
                    .await
            }
            EntityProbe::Equivocation(proof_hash) => {
                ValidatorRepository::new(&self.txn)
                    .equivocation_exists(proof_hash)
                    .await
            }
            EntityProbe::Block(number) => {
                TransactionRepository::new(&self.txn)
                    .block_exists(*number)
                    .await
            }
        }
    }
}
