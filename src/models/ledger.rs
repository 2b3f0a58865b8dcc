// Ledger records as read from the event store, plus the predicates used to select them

use rust_decimal::Decimal;
use std::fmt;

/// Kind of ledger entry recorded by the ingestion pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Action,
    DepositTaken,
    DepositGiven,
    StakingReward,
    CollectedReward,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Action => "Action",
            EventType::DepositTaken => "DepositTaken",
            EventType::DepositGiven => "DepositGiven",
            EventType::StakingReward => "StakingReward",
            EventType::CollectedReward => "CollectedReward",
            EventType::Other(name) => name,
        }
    }
}

impl From<&str> for EventType {
    fn from(value: &str) -> Self {
        match value {
            "Action" => EventType::Action,
            "DepositTaken" => EventType::DepositTaken,
            "DepositGiven" => EventType::DepositGiven,
            "StakingReward" => EventType::StakingReward,
            "CollectedReward" => EventType::CollectedReward,
            other => EventType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of the transaction action an event was produced by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActionType {
    TransferChx,
    TransferAsset,
    CreateAssetEmission,
    CreateAsset,
    SetAssetCode,
    SetAssetController,
    CreateAccount,
    SetAccountController,
    SubmitVote,
    SubmitVoteWeight,
    SetAccountEligibility,
    SetAssetEligibility,
    ChangeKycControllerAddress,
    AddKycProvider,
    RemoveKycProvider,
    ConfigureValidator,
    RemoveValidator,
    DelegateStake,
    Other(String),
}

impl ActionType {
    pub fn as_str(&self) -> &str {
        match self {
            ActionType::TransferChx => "TransferChx",
            ActionType::TransferAsset => "TransferAsset",
            ActionType::CreateAssetEmission => "CreateAssetEmission",
            ActionType::CreateAsset => "CreateAsset",
            ActionType::SetAssetCode => "SetAssetCode",
            ActionType::SetAssetController => "SetAssetController",
            ActionType::CreateAccount => "CreateAccount",
            ActionType::SetAccountController => "SetAccountController",
            ActionType::SubmitVote => "SubmitVote",
            ActionType::SubmitVoteWeight => "SubmitVoteWeight",
            ActionType::SetAccountEligibility => "SetAccountEligibility",
            ActionType::SetAssetEligibility => "SetAssetEligibility",
            ActionType::ChangeKycControllerAddress => "ChangeKycControllerAddress",
            ActionType::AddKycProvider => "AddKycProvider",
            ActionType::RemoveKycProvider => "RemoveKycProvider",
            ActionType::ConfigureValidator => "ConfigureValidator",
            ActionType::RemoveValidator => "RemoveValidator",
            ActionType::DelegateStake => "DelegateStake",
            ActionType::Other(name) => name,
        }
    }
}

impl From<&str> for ActionType {
    fn from(value: &str) -> Self {
        match value {
            "TransferChx" => ActionType::TransferChx,
            "TransferAsset" => ActionType::TransferAsset,
            "CreateAssetEmission" => ActionType::CreateAssetEmission,
            "CreateAsset" => ActionType::CreateAsset,
            "SetAssetCode" => ActionType::SetAssetCode,
            "SetAssetController" => ActionType::SetAssetController,
            "CreateAccount" => ActionType::CreateAccount,
            "SetAccountController" => ActionType::SetAccountController,
            "SubmitVote" => ActionType::SubmitVote,
            "SubmitVoteWeight" => ActionType::SubmitVoteWeight,
            "SetAccountEligibility" => ActionType::SetAccountEligibility,
            "SetAssetEligibility" => ActionType::SetAssetEligibility,
            "ChangeKycControllerAddress" => ActionType::ChangeKycControllerAddress,
            "AddKycProvider" => ActionType::AddKycProvider,
            "RemoveKycProvider" => ActionType::RemoveKycProvider,
            "ConfigureValidator" => ActionType::ConfigureValidator,
            "RemoveValidator" => ActionType::RemoveValidator,
            "DelegateStake" => ActionType::DelegateStake,
            other => ActionType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event joined with its address, action and the entity it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: EventType,
    pub amount: Option<Decimal>,
    pub address: String,
    pub tx_action_id: i64,
    pub action_type: ActionType,
    pub account_hash: Option<String>,
    pub asset_hash: Option<String>,
    pub equivocation_proof_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub hash: String,
    pub controller_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub hash: String,
    pub asset_code: Option<String>,
    pub is_eligibility_required: Option<bool>,
    pub controller_address: Option<String>,
}

/// Holding and eligibility state of one account for one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldingEligibilityRecord {
    pub account_hash: String,
    pub asset_hash: String,
    pub balance: Option<Decimal>,
    pub is_primary_eligible: Option<bool>,
    pub is_secondary_eligible: Option<bool>,
    pub kyc_controller_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorRecord {
    pub blockchain_address: String,
    pub network_address: String,
    pub shared_reward_percent: Decimal,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivocationRecord {
    pub equivocation_proof_hash: String,
    pub validator_address: String,
    pub block_number: i64,
    pub consensus_round: i32,
    pub consensus_step: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub blockchain_address: String,
    pub nonce: i64,
    pub available_balance: Decimal,
    pub deposit_balance: Decimal,
    pub staked_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub hash: String,
    pub sender_address: String,
    pub nonce: i64,
    pub action_fee: Decimal,
    pub action_count: i16,
    pub status: String,
    pub error_code: Option<i32>,
    pub failed_action_number: Option<String>,
    pub block_number: i64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    pub block_number: i64,
    pub hash: String,
    pub previous_block_hash: Option<String>,
    pub validator_address: String,
    pub configuration_block_number: i64,
    pub timestamp: i64,
}

/// Sign constraint on an event amount. Events without an amount never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSign {
    Positive,
    Negative,
}

impl AmountSign {
    pub fn matches(self, amount: Option<Decimal>) -> bool {
        match (self, amount) {
            (AmountSign::Positive, Some(amount)) => amount > Decimal::ZERO,
            (AmountSign::Negative, Some(amount)) => amount < Decimal::ZERO,
            (_, None) => false,
        }
    }
}

/// Conjunctive predicate over the event log. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub account_hash: Option<String>,
    pub asset_hash: Option<String>,
    pub equivocation_proof_hash: Option<String>,
    pub address: Option<String>,
    pub action_types: Vec<ActionType>,
    pub amount_sign: Option<AmountSign>,
    pub tx_action_ids: Option<Vec<i64>>,
}

impl EventFilter {
    pub fn for_account(hash: &str) -> Self {
        Self {
            account_hash: Some(hash.to_string()),
            ..Self::default()
        }
    }

    pub fn for_asset(hash: &str) -> Self {
        Self {
            asset_hash: Some(hash.to_string()),
            ..Self::default()
        }
    }

    pub fn for_equivocation(proof_hash: &str) -> Self {
        Self {
            equivocation_proof_hash: Some(proof_hash.to_string()),
            ..Self::default()
        }
    }

    pub fn for_address(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Self::default()
        }
    }

    pub fn for_tx_actions(ids: Vec<i64>) -> Self {
        Self {
            tx_action_ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn with_action_type(mut self, action_type: ActionType) -> Self {
        self.action_types.push(action_type);
        self
    }

    pub fn with_amount_sign(mut self, sign: AmountSign) -> Self {
        self.amount_sign = Some(sign);
        self
    }

    /// Evaluates the predicate against a single record
    pub fn matches(&self, event: &EventRecord) -> bool {
        fn same(expected: &Option<String>, actual: &Option<String>) -> bool {
            match expected {
                Some(expected) => actual.as_deref() == Some(expected.as_str()),
                None => true,
            }
        }

        same(&self.account_hash, &event.account_hash)
            && same(&self.asset_hash, &event.asset_hash)
            && same(&self.equivocation_proof_hash, &event.equivocation_proof_hash)
            && self
                .address
                .as_ref()
                .map_or(true, |address| *address == event.address)
            && (self.action_types.is_empty() || self.action_types.contains(&event.action_type))
            && self.amount_sign.map_or(true, |sign| sign.matches(event.amount))
            && self
                .tx_action_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&event.tx_action_id))
    }
}

/// Which side of the account/asset pair a holding query is keyed by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldingScope {
    Account(String),
    Asset(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorFilter {
    pub blockchain_address: Option<String>,
}

/// Existence check against one entity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityProbe {
    Address(String),
    Account(String),
    Asset(String),
    Transaction(String),
    Equivocation(String),
    Block(i64),
}
