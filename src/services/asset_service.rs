// Asset view reconstruction, the account view seen from the asset side

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{
    ActionType, AssetInfo, AssetRecord, EventFilter, EventRecord, HoldingEligibilityRecord,
    HoldingScope,
};
use crate::services::holdings::{self, Counterpart};
use crate::services::BlockchainInfoService;

const ASSET_CONTROLLER_ACTIONS: [ActionType; 2] =
    [ActionType::CreateAsset, ActionType::SetAssetController];

impl<S: LedgerStore> BlockchainInfoService<S> {
    /// Rebuilds an asset's holders, eligibilities and controller history
    pub async fn get_asset_info(&self, asset_hash: &str) -> ExplorerResult<AssetInfo> {
        tracing::debug!("Reconstructing asset {}", asset_hash);
        let reader = self.store.begin_read().await?;

        let events = reader.events(&EventFilter::for_asset(asset_hash)).await?;
        if events.is_empty() {
            return Err(ExplorerError::not_found(format!(
                "Asset {} does not exist.",
                asset_hash
            )));
        }

        let asset = reader.asset(asset_hash).await?.ok_or_else(|| {
            ExplorerError::data_integrity(format!(
                "Events reference asset {} which is missing.",
                asset_hash
            ))
        })?;
        let records = reader
            .holding_eligibilities(&HoldingScope::Asset(asset_hash.to_string()))
            .await?;

        Ok(reconstruct_asset(asset, &events, &records))
    }
}

pub fn reconstruct_asset(
    asset: AssetRecord,
    events: &[EventRecord],
    records: &[HoldingEligibilityRecord],
) -> AssetInfo {
    let mut info = AssetInfo::from(asset);
    info.holdings = holdings::holdings(records, Counterpart::Account);
    info.eligibilities = holdings::eligibilities(records, Counterpart::Account);
    info.controller_addresses = holdings::controller_addresses(events, &ASSET_CONTROLLER_ACTIONS);
    info
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use super::*;
    use crate::services::fixtures::LedgerBuilder;

    #[tokio::test]
    async fn test_asset_view_is_indexed_by_account() {
        let store = LedgerBuilder::new()
            .asset("asset-1", Some("EQ1"))
            .asset_event("asset-1", "CHxIssuer", 1, ActionType::CreateAsset)
            .asset_event("asset-1", "CHxIssuer", 2, ActionType::SetAssetCode)
            .asset_event("asset-1", "CHxNewIssuer", 3, ActionType::SetAssetController)
            .asset_event("asset-1", "CHxIssuer", 4, ActionType::SetAssetController)
            .holding("acc-1", "asset-1", Some(70), Some((true, true)), None)
            .holding("acc-2", "asset-1", Some(30), None, None)
            .holding("acc-1", "asset-2", Some(5), None, None)
            .into_store();
        let service = BlockchainInfoService::new(Arc::new(store), 100);

        let info = service.get_asset_info("asset-1").await.unwrap();

        assert_eq!(info.asset_code.as_deref(), Some("EQ1"));
        let holders: Vec<(Option<&str>, Decimal)> = info
            .holdings
            .iter()
            .map(|h| (h.account_hash.as_deref(), h.balance))
            .collect();
        assert_eq!(
            holders,
            vec![
                (Some("acc-1"), Decimal::from(70)),
                (Some("acc-2"), Decimal::from(30)),
            ]
        );
        assert!(info.holdings.iter().all(|h| h.asset_hash.is_none()));
        assert_eq!(info.eligibilities.len(), 1);
        assert_eq!(info.eligibilities[0].account_hash.as_deref(), Some("acc-1"));

        let controllers: Vec<&str> = info
            .controller_addresses
            .iter()
            .map(|c| c.blockchain_address.as_str())
            .collect();
        assert_eq!(controllers, vec!["CHxIssuer", "CHxNewIssuer"]);
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let store = LedgerBuilder::new()
            .asset("asset-1", Some("EQ1"))
            .asset_event("asset-1", "CHxIssuer", 1, ActionType::CreateAsset)
            .holding("acc-1", "asset-1", Some(70), Some((true, false)), Some("CHxKyc"))
            .into_store();
        let service = BlockchainInfoService::new(Arc::new(store), 100);

        let first = service.get_asset_info("asset-1").await.unwrap();
        let second = service.get_asset_info("asset-1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_account_events_do_not_count_for_assets() {
        let store = LedgerBuilder::new()
            .account("shared-hash")
            .account_event("shared-hash", "CHxOwner", 1, ActionType::CreateAccount)
            .into_store();
        let service = BlockchainInfoService::new(Arc::new(store), 100);

        let err = service.get_asset_info("shared-hash").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
