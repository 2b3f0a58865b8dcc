//! In-memory ledger store
//!
//! Holds a fully materialized ledger snapshot. Readers share the snapshot, so a
//! read scope is free to open and sees exactly what the ledger held when the
//! store was built.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::db::error::DbError;
use crate::db::store::{LedgerReader, LedgerStore};
use crate::models::{
    AccountRecord, ActionType, AddressRecord, AssetRecord, BlockRecord, EntityProbe,
    EquivocationRecord, EventFilter, EventRecord, EventType, HoldingEligibilityRecord,
    HoldingScope, PaginationParams, TransactionRecord, ValidatorFilter, ValidatorRecord,
};

/// Validator row including its soft-delete flag
#[derive(Debug, Clone)]
pub struct StoredValidator {
    pub record: ValidatorRecord,
    pub is_deleted: bool,
}

/// Complete ledger content. Vectors are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    pub events: Vec<EventRecord>,
    pub accounts: Vec<AccountRecord>,
    pub assets: Vec<AssetRecord>,
    pub holding_eligibilities: Vec<HoldingEligibilityRecord>,
    pub validators: Vec<StoredValidator>,
    pub equivocations: Vec<EquivocationRecord>,
    pub addresses: Vec<AddressRecord>,
    pub transactions: Vec<TransactionRecord>,
    pub blocks: Vec<BlockRecord>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event with the next sequence id and returns that id
    pub fn push_event(&mut self, mut event: EventRecord) -> i64 {
        let id = self.events.last().map_or(1, |last| last.id + 1);
        event.id = id;
        self.events.push(event);
        id
    }

    /// Appends an action-level event attributed to `address`
    pub fn push_action_event(
        &mut self,
        address: &str,
        tx_action_id: i64,
        action_type: ActionType,
        amount: Option<Decimal>,
    ) -> &mut EventRecord {
        self.push_event(EventRecord {
            id: 0,
            event_type: EventType::Action,
            amount,
            address: address.to_string(),
            tx_action_id,
            action_type,
            account_hash: None,
            asset_hash: None,
            equivocation_proof_hash: None,
        });
        let last = self.events.len() - 1;
        &mut self.events[last]
    }
}

#[derive(Clone, Default)]
pub struct MemoryLedgerStore {
    ledger: Arc<MemoryLedger>,
}

impl MemoryLedgerStore {
    pub fn new(ledger: MemoryLedger) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    type Reader = MemoryLedgerReader;

    async fn begin_read(&self) -> Result<Self::Reader, DbError> {
        Ok(MemoryLedgerReader {
            ledger: Arc::clone(&self.ledger),
        })
    }
}

pub struct MemoryLedgerReader {
    ledger: Arc<MemoryLedger>,
}

fn page<T: Clone>(items: impl Iterator<Item = T>, pagination: &PaginationParams) -> Vec<T> {
    let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(pagination.limit).unwrap_or(usize::MAX);
    items.skip(offset).take(limit).collect()
}

#[async_trait]
impl LedgerReader for MemoryLedgerReader {
    async fn events(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, DbError> {
        Ok(self
            .ledger
            .events
            .iter()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect())
    }

    async fn account(&self, hash: &str) -> Result<Option<AccountRecord>, DbError> {
        Ok(self.ledger.accounts.iter().find(|a| a.hash == hash).cloned())
    }

    async fn asset(&self, hash: &str) -> Result<Option<AssetRecord>, DbError> {
        Ok(self.ledger.assets.iter().find(|a| a.hash == hash).cloned())
    }

    async fn equivocation(&self, proof_hash: &str) -> Result<Option<EquivocationRecord>, DbError> {
        Ok(self
            .ledger
            .equivocations
            .iter()
            .find(|e| e.equivocation_proof_hash == proof_hash)
            .cloned())
    }

    async fn holding_eligibilities(
        &self,
        scope: &HoldingScope,
    ) -> Result<Vec<HoldingEligibilityRecord>, DbError> {
        Ok(self
            .ledger
            .holding_eligibilities
            .iter()
            .filter(|h| match scope {
                HoldingScope::Account(hash) => h.account_hash == *hash,
                HoldingScope::Asset(hash) => h.asset_hash == *hash,
            })
            .cloned()
            .collect())
    }

    async fn validators(&self, filter: &ValidatorFilter) -> Result<Vec<ValidatorRecord>, DbError> {
        Ok(self
            .ledger
            .validators
            .iter()
            .filter(|v| !v.is_deleted)
            .filter(|v| {
                filter
                    .blockchain_address
                    .as_ref()
                    .map_or(true, |address| *address == v.record.blockchain_address)
            })
            .map(|v| v.record.clone())
            .collect())
    }

    async fn address(&self, blockchain_address: &str) -> Result<Option<AddressRecord>, DbError> {
        Ok(self
            .ledger
            .addresses
            .iter()
            .find(|a| a.blockchain_address == blockchain_address)
            .cloned())
    }

    async fn transaction(&self, hash: &str) -> Result<Option<TransactionRecord>, DbError> {
        Ok(self.ledger.transactions.iter().find(|t| t.hash == hash).cloned())
    }

    async fn block(&self, block_number: i64) -> Result<Option<BlockRecord>, DbError> {
        Ok(self
            .ledger
            .blocks
            .iter()
            .find(|b| b.block_number == block_number)
            .cloned())
    }

    async fn transactions_page(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Vec<TransactionRecord>, DbError> {
        Ok(page(self.ledger.transactions.iter().rev().cloned(), pagination))
    }

    async fn blocks_page(&self, pagination: &PaginationParams) -> Result<Vec<BlockRecord>, DbError> {
        let mut blocks = self.ledger.blocks.clone();
        blocks.sort_by(|a, b| b.block_number.cmp(&a.block_number));
        Ok(page(blocks.into_iter(), pagination))
    }

    async fn exists(&self, probe: &EntityProbe) -> Result<bool, DbError> {
        let found = match probe {
            EntityProbe::Address(address) => self.address(address).await?.is_some(),
            EntityProbe::Account(hash) => self.account(hash).await?.is_some(),
            EntityProbe::Asset(hash) => self.asset(hash).await?.is_some(),
            EntityProbe::Transaction(hash) => self.transaction(hash).await?.is_some(),
            EntityProbe::Equivocation(proof_hash) => self.equivocation(proof_hash).await?.is_some(),
            EntityProbe::Block(number) => self.block(*number).await?.is_some(),
        };
        Ok(found)
    }
}
