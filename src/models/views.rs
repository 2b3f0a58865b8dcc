// Response views produced by the info services

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::ledger::{
    AccountRecord, AddressRecord, AssetRecord, BlockRecord, EquivocationRecord,
    TransactionRecord, ValidatorRecord,
};

/// Renders a ledger timestamp (unix milliseconds) as UTC time
pub fn timestamp_to_utc(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepositInfo {
    pub blockchain_address: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquivocationInfo {
    pub equivocation_proof_hash: String,
    pub validator_address: String,
    pub block_number: i64,
    pub consensus_round: i32,
    pub consensus_step: i16,
    pub taken_deposit: DepositInfo,
    pub given_deposits: Vec<DepositInfo>,
}

impl EquivocationInfo {
    pub fn new(record: EquivocationRecord, taken_deposit: DepositInfo) -> Self {
        Self {
            equivocation_proof_hash: record.equivocation_proof_hash,
            validator_address: record.validator_address,
            block_number: record.block_number,
            consensus_round: record.consensus_round,
            consensus_step: record.consensus_step,
            taken_deposit,
            given_deposits: Vec::new(),
        }
    }
}

/// Balance of one asset held by one account, keyed by the counterpart hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_hash: Option<String>,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_hash: Option<String>,
    pub is_primary_eligible: Option<bool>,
    pub is_secondary_eligible: Option<bool>,
    pub kyc_controller_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerAddressInfo {
    pub blockchain_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub hash: String,
    pub controller_address: Option<String>,
    pub holdings: Vec<HoldingInfo>,
    pub eligibilities: Vec<EligibilityInfo>,
    pub controller_addresses: Vec<ControllerAddressInfo>,
}

impl From<AccountRecord> for AccountInfo {
    fn from(record: AccountRecord) -> Self {
        Self {
            hash: record.hash,
            controller_address: record.controller_address,
            holdings: Vec::new(),
            eligibilities: Vec::new(),
            controller_addresses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetInfo {
    pub hash: String,
    pub asset_code: Option<String>,
    pub is_eligibility_required: Option<bool>,
    pub controller_address: Option<String>,
    pub holdings: Vec<HoldingInfo>,
    pub eligibilities: Vec<EligibilityInfo>,
    pub controller_addresses: Vec<ControllerAddressInfo>,
}

impl From<AssetRecord> for AssetInfo {
    fn from(record: AssetRecord) -> Self {
        Self {
            hash: record.hash,
            asset_code: record.asset_code,
            is_eligibility_required: record.is_eligibility_required,
            controller_address: record.controller_address,
            holdings: Vec::new(),
            eligibilities: Vec::new(),
            controller_addresses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeInfo {
    pub staker_address: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorInfo {
    pub blockchain_address: String,
    pub network_address: String,
    pub shared_reward_percent: Decimal,
    pub is_active: bool,
    pub stakes: Vec<StakeInfo>,
}

impl From<ValidatorRecord> for ValidatorInfo {
    fn from(record: ValidatorRecord) -> Self {
        Self {
            blockchain_address: record.blockchain_address,
            network_address: record.network_address,
            shared_reward_percent: record.shared_reward_percent,
            is_active: record.is_active,
            stakes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatorInfoShort {
    pub blockchain_address: String,
    pub is_active: bool,
}

impl From<ValidatorRecord> for ValidatorInfoShort {
    fn from(record: ValidatorRecord) -> Self {
        Self {
            blockchain_address: record.blockchain_address,
            is_active: record.is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressInfo {
    pub blockchain_address: String,
    pub nonce: i64,
    pub available_balance: Decimal,
    pub deposit_balance: Decimal,
    pub staked_balance: Decimal,
}

impl From<AddressRecord> for AddressInfo {
    fn from(record: AddressRecord) -> Self {
        Self {
            blockchain_address: record.blockchain_address,
            nonce: record.nonce,
            available_balance: record.available_balance,
            deposit_balance: record.deposit_balance,
            staked_balance: record.staked_balance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxInfo {
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
    pub time: Option<DateTime<Utc>>,
}

impl From<TransactionRecord> for TxInfo {
    fn from(record: TransactionRecord) -> Self {
        Self {
            time: timestamp_to_utc(record.timestamp),
            hash: record.hash,
            sender_address: record.sender_address,
            nonce: record.nonce,
            action_fee: record.action_fee,
            action_count: record.action_count,
            status: record.status,
            error_code: record.error_code,
            failed_action_number: record.failed_action_number,
            block_number: record.block_number,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxInfoShort {
    pub hash: String,
    pub sender_address: String,
    pub action_count: i16,
    pub action_fee: Decimal,
    pub status: String,
    pub timestamp: i64,
    pub time: Option<DateTime<Utc>>,
}

impl From<TransactionRecord> for TxInfoShort {
    fn from(record: TransactionRecord) -> Self {
        Self {
            time: timestamp_to_utc(record.timestamp),
            hash: record.hash,
            sender_address: record.sender_address,
            action_count: record.action_count,
            action_fee: record.action_fee,
            status: record.status,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfo {
    pub block_number: i64,
    pub hash: String,
    pub previous_block_hash: Option<String>,
    pub validator_address: String,
    pub configuration_block_number: i64,
    pub timestamp: i64,
    pub time: Option<DateTime<Utc>>,
}

impl From<BlockRecord> for BlockInfo {
    fn from(record: BlockRecord) -> Self {
        Self {
            time: timestamp_to_utc(record.timestamp),
            block_number: record.block_number,
            hash: record.hash,
            previous_block_hash: record.previous_block_hash,
            validator_address: record.validator_address,
            configuration_block_number: record.configuration_block_number,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockInfoShort {
    pub block_number: i64,
    pub hash: String,
    pub validator_address: String,
    pub timestamp: i64,
    pub time: Option<DateTime<Utc>>,
}

impl From<BlockRecord> for BlockInfoShort {
    fn from(record: BlockRecord) -> Self {
        Self {
            time: timestamp_to_utc(record.timestamp),
            block_number: record.block_number,
            hash: record.hash,
            validator_address: record.validator_address,
            timestamp: record.timestamp,
        }
    }
}

/// Whatever entity a search string resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SearchResult {
    Address(AddressInfo),
    Account(AccountInfo),
    Asset(AssetInfo),
    Transaction(TxInfo),
    Equivocation(EquivocationInfo),
    Block(BlockInfo),
}

impl SearchResult {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchResult::Address(_) => "address",
            SearchResult::Account(_) => "account",
            SearchResult::Asset(_) => "asset",
            SearchResult::Transaction(_) => "transaction",
            SearchResult::Equivocation(_) => "equivocation",
            SearchResult::Block(_) => "block",
        }
    }
}
