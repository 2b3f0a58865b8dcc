// Business logic service implementations
//
// `BlockchainInfoService` rebuilds account, asset, validator and equivocation views
// from the event log on every call and dispatches free-form search strings. Its
// operations are spread over the submodules below, one concern per file.

pub mod account_service;
pub mod asset_service;
pub mod equivocation_service;
pub mod health;
pub mod holdings;
pub mod listing_service;
pub mod resolvers;
pub mod search_service;
pub mod validator_service;

#[cfg(test)]
pub(crate) mod fixtures;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::db::LedgerStore;
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::EventRecord;
use resolvers::{AddressInfoResolver, BlockInfoResolver, LedgerInfoResolver, TxInfoResolver};

/// Read-only query service over the ledger. Holds no per-call state.
pub struct BlockchainInfoService<S: LedgerStore> {
    store: Arc<S>,
    address_info: Arc<dyn AddressInfoResolver>,
    tx_info: Arc<dyn TxInfoResolver>,
    block_info: Arc<dyn BlockInfoResolver>,
    max_page_limit: u64,
}

impl<S: LedgerStore> BlockchainInfoService<S> {
    /// Creates the service with the store-backed address, transaction and block resolvers
    pub fn new(store: Arc<S>, max_page_limit: u64) -> Self {
        let resolver = Arc::new(LedgerInfoResolver::new(Arc::clone(&store)));
        Self::with_resolvers(
            store,
            resolver.clone(),
            resolver.clone(),
            resolver,
            max_page_limit,
        )
    }

    pub fn with_resolvers(
        store: Arc<S>,
        address_info: Arc<dyn AddressInfoResolver>,
        tx_info: Arc<dyn TxInfoResolver>,
        block_info: Arc<dyn BlockInfoResolver>,
        max_page_limit: u64,
    ) -> Self {
        Self {
            store,
            address_info,
            tx_info,
            block_info,
            max_page_limit,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Amount of an event whose type guarantees one
fn required_amount(event: &EventRecord) -> ExplorerResult<Decimal> {
    event.amount.ok_or_else(|| {
        ExplorerError::data_integrity(format!(
            "{} event {} has no amount.",
            event.event_type, event.id
        ))
    })
}

/// Amount of an event recorded with the opposite sign, flipped positive
fn negated_amount(event: &EventRecord) -> ExplorerResult<Decimal> {
    let mut amount = -required_amount(event)?;
    // Negating zero leaves the sign bit set
    if amount.is_zero() {
        amount.set_sign_positive(true);
    }
    Ok(amount)
}
