//! Read-only access to the ledger
//!
//! Every public service operation opens exactly one [`LedgerReader`] through
//! [`LedgerStore::begin_read`] and drops it before returning. Readers never
//! write, and dropping one releases whatever the backend holds for it.

use async_trait::async_trait;

use crate::db::error::DbError;
use crate::models::{
    AccountRecord, AddressRecord, AssetRecord, BlockRecord, EntityProbe, EquivocationRecord,
    EventFilter, EventRecord, HoldingEligibilityRecord, HoldingScope, PaginationParams,
    TransactionRecord, ValidatorFilter, ValidatorRecord,
};

/// Source of read scopes over the ledger
#[async_trait]
pub trait LedgerStore: Send + Sync + 'static {
    type Reader: LedgerReader;

    /// Opens a short-lived read scope
    async fn begin_read(&self) -> Result<Self::Reader, DbError>;
}

/// Queries available inside one read scope
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Events matching `filter`, in insertion order
    async fn events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, DbError>;

    async fn account(&self, hash: &str) -> Result<Option<AccountRecord>, DbError>;

    async fn asset(&self, hash: &str) -> Result<Option<AssetRecord>, DbError>;

    async fn equivocation(&self, proof_hash: &str) -> Result<Option<EquivocationRecord>, DbError>;

    async fn holding_eligibilities(
        &self,
        scope: &HoldingScope,
    ) -> Result<Vec<HoldingEligibilityRecord>, DbError>;

    /// Live validators only; soft-deleted rows are never returned
    async fn validators(&self, filter: &ValidatorFilter) -> Result<Vec<ValidatorRecord>, DbError>;

    async fn address(&self, blockchain_address: &str) -> Result<Option<AddressRecord>, DbError>;

    async fn transaction(&self, hash: &str) -> Result<Option<TransactionRecord>, DbError>;

    async fn block(&self, block_number: i64) -> Result<Option<BlockRecord>, DbError>;

    /// Newest transactions first
    async fn transactions_page(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Vec<TransactionRecord>, DbError>;

    /// Newest blocks first
    async fn blocks_page(&self, pagination: &PaginationParams) -> Result<Vec<BlockRecord>, DbError>;

    async fn exists(&self, probe: &EntityProbe) -> Result<bool, DbError>;
}
