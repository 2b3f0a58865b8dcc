// Equivocation view reconstruction
//
// Each equivocation proof carries one DepositTaken event (the seized deposit,
// recorded negative) and any number of DepositGiven events (its redistribution,
// recorded positive). Both are reported as positive amounts.

use crate::db::{LedgerReader, LedgerStore};
use crate::error::{ExplorerError, ExplorerResult};
use crate::models::{
    DepositInfo, EquivocationInfo, EquivocationRecord, EventFilter, EventRecord, EventType,
};
use crate::services::{negated_amount, required_amount, BlockchainInfoService};

impl<S: LedgerStore> BlockchainInfoService<S> {
    pub async fn get_equivocation_info(
        &self,
        equivocation_proof_hash: &str,
    ) -> ExplorerResult<EquivocationInfo> {
        tracing::debug!("Reconstructing equivocation {}", equivocation_proof_hash);
        let reader = self.store.begin_read().await?;

        let events = reader
            .events(&EventFilter::for_equivocation(equivocation_proof_hash))
            .await?;
        if events.is_empty() {
            return Err(ExplorerError::not_found(format!(
                "Equivocation {} does not exist.",
                equivocation_proof_hash
            )));
        }

        let record = reader
            .equivocation(equivocation_proof_hash)
            .await?
            .ok_or_else(|| {
                ExplorerError::data_integrity(format!(
                    "Events reference equivocation {} which is missing.",
                    equivocation_proof_hash
                ))
            })?;

        reconstruct_equivocation(record, &events)
    }
}

/// Folds the deposit events of one equivocation into its view
pub fn reconstruct_equivocation(
    record: EquivocationRecord,
    events: &[EventRecord],
) -> ExplorerResult<EquivocationInfo> {
    let mut taken = events
        .iter()
        .filter(|event| event.event_type == EventType::DepositTaken);

    let taken_event = match (taken.next(), taken.next()) {
        (Some(event), None) => event,
        (None, _) => {
            return Err(ExplorerError::data_integrity(format!(
                "Equivocation {} has no DepositTaken event.",
                record.equivocation_proof_hash
            )))
        }
        (Some(_), Some(_)) => {
            return Err(ExplorerError::data_integrity(format!(
                "Equivocation {} has more than one DepositTaken event.",
                record.equivocation_proof_hash
            )))
        }
    };

    let taken_deposit = DepositInfo {
        blockchain_address: taken_event.address.clone(),
        amount: negated_amount(taken_event)?,
    };

    let given_deposits = events
        .iter()
        .filter(|event| event.event_type == EventType::DepositGiven)
        .map(|event| {
            Ok(DepositInfo {
                blockchain_address: event.address.clone(),
                amount: required_amount(event)?,
            })
        })
        .collect::<ExplorerResult<Vec<_>>>()?;

    let mut info = EquivocationInfo::new(record, taken_deposit);
    info.given_deposits = given_deposits;
    Ok(info)
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
    async fn test_deposits_are_sign_normalized() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositGiven, "CHxV1", Some(20))
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", Some(-50))
                .deposit_event("proof-1", EventType::DepositGiven, "CHxV2", Some(30)),
        );

        let info = service.get_equivocation_info("proof-1").await.unwrap();

        assert_eq!(info.validator_address, "CHxCheater");
        assert_eq!(info.taken_deposit.blockchain_address, "CHxCheater");
        assert_eq!(info.taken_deposit.amount, Decimal::from(50));

        let given: Vec<(&str, Decimal)> = info
            .given_deposits
            .iter()
            .map(|d| (d.blockchain_address.as_str(), d.amount))
            .collect();
        assert_eq!(
            given,
            vec![("CHxV1", Decimal::from(20)), ("CHxV2", Decimal::from(30))]
        );
        let total: Decimal = info.given_deposits.iter().map(|d| d.amount).sum();
        assert_eq!(total, info.taken_deposit.amount);
    }

    #[tokio::test]
    async fn test_zero_deposit_taken_is_reported_as_plain_zero() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", Some(0)),
        );

        let info = service.get_equivocation_info("proof-1").await.unwrap();

        assert!(info.taken_deposit.amount.is_sign_positive());
        let json = serde_json::to_value(&info.taken_deposit).unwrap();
        assert_eq!(json["amount"], "0");
    }

    #[tokio::test]
    async fn test_repeated_reads_are_identical() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", Some(-50))
                .deposit_event("proof-1", EventType::DepositGiven, "CHxV1", Some(50)),
        );

        let first = service.get_equivocation_info("proof-1").await.unwrap();
        let second = service.get_equivocation_info("proof-1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_proof_is_not_found() {
        let err = service(LedgerBuilder::new())
            .get_equivocation_info("missing")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ExplorerError::NotFound("Equivocation missing does not exist.".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_deposit_taken_is_an_integrity_fault() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositGiven, "CHxV1", Some(20)),
        );

        let err = service.get_equivocation_info("proof-1").await.unwrap_err();
        assert!(matches!(err, ExplorerError::DataIntegrity(_)));
    }

    #[tokio::test]
    async fn test_duplicate_deposit_taken_is_an_integrity_fault() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", Some(-50))
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", Some(-50)),
        );

        let err = service.get_equivocation_info("proof-1").await.unwrap_err();
        assert!(matches!(err, ExplorerError::DataIntegrity(_)));
    }

    #[tokio::test]
    async fn test_deposit_without_amount_is_an_integrity_fault() {
        let service = service(
            LedgerBuilder::new()
                .equivocation("proof-1", "CHxCheater")
                .deposit_event("proof-1", EventType::DepositTaken, "CHxCheater", None),
        );

        let err = service.get_equivocation_info("proof-1").await.unwrap_err();
        assert!(matches!(err, ExplorerError::DataIntegrity(_)));
    }
}
