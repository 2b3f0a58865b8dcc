// Projections shared by the account and asset views
//
// Holding/eligibility rows are keyed by the (account, asset) pair. An account view
// reports the asset side of each row and an asset view the account side.

use std::collections::HashSet;

use crate::models::{
    ActionType, ControllerAddressInfo, EligibilityInfo, EventRecord, HoldingEligibilityRecord,
    HoldingInfo,
};

/// Which hash of the pair a view reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counterpart {
    Asset,
    Account,
}

impl Counterpart {
    fn keys(self, record: &HoldingEligibilityRecord) -> (Option<String>, Option<String>) {
        match self {
            Counterpart::Asset => (None, Some(record.asset_hash.clone())),
            Counterpart::Account => (Some(record.account_hash.clone()), None),
        }
    }
}

/// Rows that carry a balance
pub fn holdings(records: &[HoldingEligibilityRecord], counterpart: Counterpart) -> Vec<HoldingInfo> {
    records
        .iter()
        .filter_map(|record| {
            let balance = record.balance?;
            let (account_hash, asset_hash) = counterpart.keys(record);
            Some(HoldingInfo {
                account_hash,
                asset_hash,
                balance,
            })
        })
        .collect()
}

/// Rows that carry an eligibility flag or a KYC controller
pub fn eligibilities(
    records: &[HoldingEligibilityRecord],
    counterpart: Counterpart,
) -> Vec<EligibilityInfo> {
    records
        .iter()
        .filter(|record| {
            record.is_primary_eligible.is_some()
                || record.is_secondary_eligible.is_some()
                || record.kyc_controller_address.is_some()
        })
        .map(|record| {
            let (account_hash, asset_hash) = counterpart.keys(record);
            EligibilityInfo {
                account_hash,
                asset_hash,
                is_primary_eligible: record.is_primary_eligible,
                is_secondary_eligible: record.is_secondary_eligible,
                kyc_controller_address: record.kyc_controller_address.clone(),
            }
        })
        .collect()
}

/// Distinct addresses behind the given controller actions, in first-seen order
pub fn controller_addresses(
    events: &[EventRecord],
    controller_actions: &[ActionType],
) -> Vec<ControllerAddressInfo> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter(|event| controller_actions.contains(&event.action_type))
        .filter(|event| seen.insert(event.address.as_str()))
        .map(|event| ControllerAddressInfo {
            blockchain_address: event.address.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;
    use rust_decimal::Decimal;

    fn record(
        balance: Option<i64>,
        primary: Option<bool>,
        secondary: Option<bool>,
        kyc: Option<&str>,
    ) -> HoldingEligibilityRecord {
        HoldingEligibilityRecord {
            account_hash: "acc".to_string(),
            asset_hash: "ast".to_string(),
            balance: balance.map(Decimal::from),
            is_primary_eligible: primary,
            is_secondary_eligible: secondary,
            kyc_controller_address: kyc.map(str::to_string),
        }
    }

    fn controller_event(address: &str, action_type: ActionType) -> EventRecord {
        EventRecord {
            id: 0,
            event_type: EventType::Action,
            amount: None,
            address: address.to_string(),
            tx_action_id: 1,
            action_type,
            account_hash: Some("acc".to_string()),
            asset_hash: None,
            equivocation_proof_hash: None,
        }
    }

    #[test]
    fn test_balance_and_eligibility_are_independent() {
        let records = vec![
            record(Some(10), None, None, None),
            record(None, Some(true), None, None),
            record(None, None, Some(false), None),
            record(None, None, None, Some("CHxKyc")),
            record(Some(3), Some(false), Some(true), None),
            record(None, None, None, None),
        ];

        let holdings = holdings(&records, Counterpart::Asset);
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].asset_hash.as_deref(), Some("ast"));
        assert_eq!(holdings[0].account_hash, None);

        let eligibilities = eligibilities(&records, Counterpart::Account);
        assert_eq!(eligibilities.len(), 4);
        assert!(eligibilities
            .iter()
            .all(|e| e.account_hash.as_deref() == Some("acc") && e.asset_hash.is_none()));
    }

    #[test]
    fn test_controller_addresses_are_distinct_in_first_seen_order() {
        let events = vec![
            controller_event("CHxB", ActionType::CreateAccount),
            controller_event("CHxZ", ActionType::TransferAsset),
            controller_event("CHxA", ActionType::SetAccountController),
            controller_event("CHxB", ActionType::SetAccountController),
        ];

        let addresses: Vec<String> = controller_addresses(
            &events,
            &[ActionType::CreateAccount, ActionType::SetAccountController],
        )
        .into_iter()
        .map(|c| c.blockchain_address)
        .collect();

        assert_eq!(addresses, vec!["CHxB".to_string(), "CHxA".to_string()]);
    }
}
