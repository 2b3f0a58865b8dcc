// Ledger builder shared by the service tests

use rust_decimal::Decimal;

use crate::db::{MemoryLedger, MemoryLedgerStore, StoredValidator};
use crate::models::{
    AccountRecord, ActionType, AddressRecord, AssetRecord, BlockRecord, EquivocationRecord,
    EventRecord, EventType, HoldingEligibilityRecord, TransactionRecord, ValidatorRecord,
};

#[derive(Default)]
pub struct LedgerBuilder {
    ledger: MemoryLedger,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_store(self) -> MemoryLedgerStore {
        MemoryLedgerStore::new(self.ledger)
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.ledger.events
    }

    pub fn address(mut self, blockchain_address: &str) -> Self {
        self.ledger.addresses.push(AddressRecord {
            blockchain_address: blockchain_address.to_string(),
            nonce: 3,
            available_balance: Decimal::from(100),
            deposit_balance: Decimal::from(5000),
            staked_balance: Decimal::ZERO,
        });
        self
    }

    pub fn block(mut self, block_number: i64) -> Self {
        self.ledger.blocks.push(BlockRecord {
            block_number,
            hash: format!("block-hash-{}", block_number),
            previous_block_hash: None,
            validator_address: "CHxValidator".to_string(),
            configuration_block_number: 0,
            timestamp: 1_560_000_000_000 + block_number,
        });
        self
    }

    pub fn transaction(mut self, hash: &str, sender_address: &str, block_number: i64) -> Self {
        self.ledger.transactions.push(TransactionRecord {
            hash: hash.to_string(),
            sender_address: sender_address.to_string(),
            nonce: 1,
            action_fee: Decimal::new(1, 2),
            action_count: 1,
            status: "Success".to_string(),
            error_code: None,
            failed_action_number: None,
            block_number,
            timestamp: 1_560_000_000_000,
        });
        self
    }

    pub fn account(mut self, hash: &str) -> Self {
        self.ledger.accounts.push(AccountRecord {
            hash: hash.to_string(),
            controller_address: None,
        });
        self
    }

    pub fn asset(mut self, hash: &str, asset_code: Option<&str>) -> Self {
        self.ledger.assets.push(AssetRecord {
            hash: hash.to_string(),
            asset_code: asset_code.map(str::to_string),
            is_eligibility_required: Some(true),
            controller_address: None,
        });
        self
    }

    pub fn holding(
        mut self,
        account_hash: &str,
        asset_hash: &str,
        balance: Option<i64>,
        eligibility: Option<(bool, bool)>,
        kyc_controller_address: Option<&str>,
    ) -> Self {
        self.ledger
            .holding_eligibilities
            .push(HoldingEligibilityRecord {
                account_hash: account_hash.to_string(),
                asset_hash: asset_hash.to_string(),
                balance: balance.map(Decimal::from),
                is_primary_eligible: eligibility.map(|(primary, _)| primary),
                is_secondary_eligible: eligibility.map(|(_, secondary)| secondary),
                kyc_controller_address: kyc_controller_address.map(str::to_string),
            });
        self
    }

    /// Action event referencing an account
    pub fn account_event(
        mut self,
        account_hash: &str,
        address: &str,
        tx_action_id: i64,
        action_type: ActionType,
    ) -> Self {
        self.ledger
            .push_action_event(address, tx_action_id, action_type, None)
            .account_hash = Some(account_hash.to_string());
        self
    }

    /// Action event referencing an asset
    pub fn asset_event(
        mut self,
        asset_hash: &str,
        address: &str,
        tx_action_id: i64,
        action_type: ActionType,
    ) -> Self {
        self.ledger
            .push_action_event(address, tx_action_id, action_type, None)
            .asset_hash = Some(asset_hash.to_string());
        self
    }

    pub fn equivocation(mut self, proof_hash: &str, validator_address: &str) -> Self {
        self.ledger.equivocations.push(EquivocationRecord {
            equivocation_proof_hash: proof_hash.to_string(),
            validator_address: validator_address.to_string(),
            block_number: 42,
            consensus_round: 1,
            consensus_step: 2,
        });
        self
    }

    /// Deposit event tied to an equivocation proof
    pub fn deposit_event(
        mut self,
        proof_hash: &str,
        event_type: EventType,
        address: &str,
        amount: Option<i64>,
    ) -> Self {
        self.ledger.push_event(EventRecord {
            id: 0,
            event_type,
            amount: amount.map(Decimal::from),
            address: address.to_string(),
            tx_action_id: 0,
            action_type: ActionType::SubmitVote,
            account_hash: None,
            asset_hash: None,
            equivocation_proof_hash: Some(proof_hash.to_string()),
        });
        self
    }

    pub fn validator(mut self, blockchain_address: &str, is_active: bool, is_deleted: bool) -> Self {
        self.ledger.validators.push(StoredValidator {
            record: ValidatorRecord {
                blockchain_address: blockchain_address.to_string(),
                network_address: "val.example.org:25718".to_string(),
                shared_reward_percent: Decimal::from(40),
                is_active,
            },
            is_deleted,
        });
        self
    }

    /// Ledger entry produced by a DelegateStake action
    pub fn stake_entry(mut self, address: &str, tx_action_id: i64, amount: i64) -> Self {
        self.ledger.push_action_event(
            address,
            tx_action_id,
            ActionType::DelegateStake,
            Some(Decimal::from(amount)),
        );
        self
    }

    pub fn action_entry(
        mut self,
        address: &str,
        tx_action_id: i64,
        action_type: ActionType,
        amount: Option<i64>,
    ) -> Self {
        self.ledger
            .push_action_event(address, tx_action_id, action_type, amount.map(Decimal::from));
        self
    }
}
