// Account view reconstruction

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{
    AccountInfo, AccountRecord, ActionType, EventFilter, EventRecord, HoldingEligibilityRecord,
    HoldingScope,
};
use crate::services::holdings::{self, Counterpart};
use crate::services::BlockchainInfoService;

const ACCOUNT_CONTROLLER_ACTIONS: [ActionType; 2] =
    [ActionType::CreateAccount, ActionType::SetAccountController];

impl<S: LedgerStore> BlockchainInfoService<S> {
    /// Rebuilds an account's holdings, eligibilities and controller history
    pub async fn get_account_info(&self, account_hash: &str) -> ExplorerResult<AccountInfo> {
        tracing::debug!("Reconstructing account {}", account_hash);
        let reader = self.store.begin_read().await?;

        let events = reader.events(&EventFilter::for_account(account_hash)).await?;
        if events.is_empty() {
            return Err(ExplorerError::not_found(format!(
                "Account {} does not exist.",
                account_hash
            )));
        }

        let account = reader.account(account_hash).await?.ok_or_else(|| {
            ExplorerError::data_integrity(format!(
                "Events reference account {} which is missing.",
                account_hash
            ))
        })?;
        let records = reader
            .holding_eligibilities(&HoldingScope::Account(account_hash.to_string()))
            .await?;

        Ok(reconstruct_account(account, &events, &records))
    }
}

/// Folds an account's events and holding rows into its view
pub fn reconstruct_account(
    account: AccountRecord,
    events: &[EventRecord],
    records: &[HoldingEligibilityRecord],
) -> AccountInfo {
    let mut info = AccountInfo::from(account);
    info.holdings = holdings::holdings(records, Counterpart::Asset);
    info.eligibilities = holdings::eligibilities(records, Counterpart::Asset);
    info.controller_addresses = holdings::controller_addresses(events, &ACCOUNT_CONTROLLER_ACTIONS);
    info
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::db::MemoryLedgerStore;
    use crate::services::fixtures::LedgerBuilder;

    fn service(builder: LedgerBuilder) -> BlockchainInfoService<MemoryLedgerStore> {
        BlockchainInfoService::new(Arc::new(builder.into_store()), 100)
    }

    fn sample_ledger() -> LedgerBuilder {
        LedgerBuilder::new()
            .account("acc-1")
            .account_event("acc-1", "CHxOwner", 1, ActionType::CreateAccount)
            .account_event("acc-1", "CHxOwner", 2, ActionType::SetAccountController)
            .account_event("acc-1", "CHxOther", 3, ActionType::SetAccountController)
            .account_event("acc-1", "CHxSender", 4, ActionType::TransferAsset)
            .holding("acc-1", "asset-1", Some(250), Some((true, false)), Some("CHxKyc"))
            .holding("acc-1", "asset-2", Some(10), None, None)
            .holding("acc-1", "asset-3", None, None, Some("CHxKyc"))
            .holding("acc-2", "asset-1", Some(999), None, None)
    }

    #[tokio::test]
    async fn test_unknown_account_is_not_found() {
        let service = service(LedgerBuilder::new().account("acc-1"));

        let err = service.get_account_info("acc-1").await.unwrap_err();
        assert_eq!(
            err,
            ExplorerError::NotFound("Account acc-1 does not exist.".to_string())
        );
    }

    #[tokio::test]
    async fn test_account_view_is_rebuilt_from_events() {
        let info = service(sample_ledger())
            .get_account_info("acc-1")
            .await
            .unwrap();

        assert_eq!(info.hash, "acc-1");

        let holdings: Vec<(Option<&str>, Decimal)> = info
            .holdings
            .iter()
            .map(|h| (h.asset_hash.as_deref(), h.balance))
            .collect();
        assert_eq!(
            holdings,
            vec![
                (Some("asset-1"), Decimal::from(250)),
                (Some("asset-2"), Decimal::from(10)),
            ]
        );

        let eligible_assets: Vec<Option<&str>> = info
            .eligibilities
            .iter()
            .map(|e| e.asset_hash.as_deref())
            .collect();
        assert_eq!(eligible_assets, vec![Some("asset-1"), Some("asset-3")]);
        assert_eq!(info.eligibilities[0].is_primary_eligible, Some(true));
        assert_eq!(info.eligibilities[0].is_secondary_eligible, Some(false));

        let controllers: Vec<&str> = info
            .controller_addresses
            .iter()
            .map(|c| c.blockchain_address.as_str())
            .collect();
        assert_eq!(controllers, vec!["CHxOwner", "CHxOther"]);
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let service = service(sample_ledger());

        let first = service.get_account_info("acc-1").await.unwrap();
        let second = service.get_account_info("acc-1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_events_without_account_row_are_an_integrity_fault() {
        let service = service(LedgerBuilder::new().account_event(
            "ghost",
            "CHxOwner",
            1,
            ActionType::CreateAccount,
        ));

        let err = service.get_account_info("ghost").await.unwrap_err();
        assert!(matches!(err, ExplorerError::DataIntegrity(_)));
    }
}
