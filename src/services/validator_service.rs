// Validator view reconstruction
//
// A DelegateStake action fans out into one positive ledger entry attributed to the
// validator and one negative entry per contributing staker, all sharing the action
// id. Stakes are found in two passes: first the validator's own positive entries
// give the action ids, then the negative entries under those ids give the stakers.

use std::collections::HashSet;

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{
    ActionType, AmountSign, EventFilter, EventRecord, StakeInfo, ValidatorFilter, ValidatorInfo,
};
use crate::services::{negated_amount, BlockchainInfoService};

impl<S: LedgerStore> BlockchainInfoService<S> {
    pub async fn get_validator_info(&self, blockchain_address: &str) -> ExplorerResult<ValidatorInfo> {
        tracing::debug!("Reconstructing validator {}", blockchain_address);
        let reader = self.store.begin_read().await?;

        let mut validators = reader
            .validators(&ValidatorFilter {
                blockchain_address: Some(blockchain_address.to_string()),
            })
            .await?;
        let validator = match validators.len() {
            0 => {
                return Err(ExplorerError::not_found(format!(
                    "Validator {} does not exist.",
                    blockchain_address
                )))
            }
            1 => validators.remove(0),
            count => {
                return Err(ExplorerError::data_integrity(format!(
                    "Validator {} has {} live records.",
                    blockchain_address, count
                )))
            }
        };

        let markers = reader
            .events(
                &EventFilter::for_address(blockchain_address)
                    .with_action_type(ActionType::DelegateStake)
                    .with_amount_sign(AmountSign::Positive),
            )
            .await?;
        let action_ids = stake_action_ids(&markers);

        let entries = if action_ids.is_empty() {
            Vec::new()
        } else {
            reader
                .events(
                    &EventFilter::for_tx_actions(action_ids)
                        .with_amount_sign(AmountSign::Negative),
                )
                .await?
        };

        let mut info = ValidatorInfo::from(validator);
        info.stakes = stakes(&entries)?;
        Ok(info)
    }
}

/// Distinct action ids of the validator's own delegation entries, first-seen order
pub fn stake_action_ids(markers: &[EventRecord]) -> Vec<i64> {
    let mut seen = HashSet::new();
    markers
        .iter()
        .map(|event| event.tx_action_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// One stake per staker entry, amounts reported positive
pub fn stakes(entries: &[EventRecord]) -> ExplorerResult<Vec<StakeInfo>> {
    entries
        .iter()
        .map(|entry| {
            Ok(StakeInfo {
                staker_address: entry.address.clone(),
                amount: negated_amount(entry)?,
            })
        })
        .collect()
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

    #[tokio::test]
    async fn test_stakes_are_joined_through_delegation_actions() {
        let service = service(
            LedgerBuilder::new()
                .validator("CHxVal", true, false)
                .stake_entry("CHxVal", 10, 10)
                .stake_entry("CHxStaker1", 10, -10)
                .stake_entry("CHxVal", 11, 15)
                .stake_entry("CHxStaker2", 11, -15)
                // another validator's delegation must not leak in
                .stake_entry("CHxOtherVal", 12, 7)
                .stake_entry("CHxStaker3", 12, -7)
                // outgoing transfer from the validator is not a delegation marker
                .action_entry("CHxVal", 13, ActionType::TransferChx, Some(5))
                .action_entry("CHxStaker4", 13, ActionType::TransferChx, Some(-5)),
        );

        let info = service.get_validator_info("CHxVal").await.unwrap();

        assert!(info.is_active);
        let stakes: Vec<(&str, Decimal)> = info
            .stakes
            .iter()
            .map(|s| (s.staker_address.as_str(), s.amount))
            .collect();
        assert_eq!(
            stakes,
            vec![
                ("CHxStaker1", Decimal::from(10)),
                ("CHxStaker2", Decimal::from(15)),
            ]
        );
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let service = service(
            LedgerBuilder::new()
                .validator("CHxVal", true, false)
                .stake_entry("CHxVal", 10, 10)
                .stake_entry("CHxStaker1", 10, -10),
        );

        let first = service.get_validator_info("CHxVal").await.unwrap();
        let second = service.get_validator_info("CHxVal").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_stake_entry_is_reported_as_plain_zero() {
        let events = LedgerBuilder::new()
            .stake_entry("CHxStaker1", 10, 0)
            .into_events();

        let stakes = stakes(&events).unwrap();

        assert!(stakes[0].amount.is_sign_positive());
        let json = serde_json::to_value(&stakes[0]).unwrap();
        assert_eq!(json["amount"], "0");
    }

    #[tokio::test]
    async fn test_validator_without_delegations_has_no_stakes() {
        let info = service(LedgerBuilder::new().validator("CHxVal", false, false))
            .get_validator_info("CHxVal")
            .await
            .unwrap();
        assert!(!info.is_active);
        assert!(info.stakes.is_empty());
    }

    #[tokio::test]
    async fn test_soft_deleted_validator_is_not_found() {
        let err = service(LedgerBuilder::new().validator("CHxVal", true, true))
            .get_validator_info("CHxVal")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExplorerError::NotFound("Validator CHxVal does not exist.".to_string())
        );
    }

    #[tokio::test]
    async fn test_duplicate_live_validators_are_an_integrity_fault() {
        let err = service(
            LedgerBuilder::new()
                .validator("CHxVal", true, false)
                .validator("CHxVal", false, false),
        )
        .get_validator_info("CHxVal")
        .await
        .unwrap_err();
        assert!(matches!(err, ExplorerError::DataIntegrity(_)));
    }

    #[test]
    fn test_stake_action_ids_are_distinct() {
        let markers = LedgerBuilder::new()
            .stake_entry("CHxVal", 4, 1)
            .stake_entry("CHxVal", 2, 1)
            .stake_entry("CHxVal", 4, 1);
        let events = markers.into_events();
        assert_eq!(stake_action_ids(&events), vec![4, 2]);
    }
}
