// Transaction, block and address database operations
// All queries go through the SeaORM query builder.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::db::error::DbError;
use crate::entity::{addresses, blocks, transactions};
use crate::models::{AddressRecord, BlockRecord, PaginationParams, TransactionRecord};

#[derive(Debug, FromQueryResult)]
struct TransactionRow {
    hash: String,
    sender_address: String,
    nonce: i64,
    action_fee: Decimal,
    action_count: i16,
    status: String,
    error_code: Option<i32>,
    failed_action_number: Option<String>,
    block_number: i64,
    timestamp: i64,
}

impl From<TransactionRow> for TransactionRecord {
    fn from(row: TransactionRow) -> Self {
        TransactionRecord {
            hash: row.hash,
            sender_address: row.sender_address,
            nonce: row.nonce,
            action_fee: row.action_fee,
            action_count: row.action_count,
            status: row.status,
            error_code: row.error_code,
            failed_action_number: row.failed_action_number,
            block_number: row.block_number,
            timestamp: row.timestamp,
        }
    }
}

impl From<blocks::Model> for BlockRecord {
    fn from(model: blocks::Model) -> Self {
        BlockRecord {
            block_number: model.block_number,
            hash: model.hash,
            previous_block_hash: model.previous_block_hash,
            validator_address: model.validator_address,
            configuration_block_number: model.configuration_block_number,
            timestamp: model.timestamp,
        }
    }
}

/// Transactions joined with the number of the block that included them
fn transactions_with_block() -> Select<transactions::Entity> {
    transactions::Entity::find()
        .select_only()
        .columns([
            transactions::Column::Hash,
            transactions::Column::SenderAddress,
            transactions::Column::Nonce,
            transactions::Column::ActionFee,
            transactions::Column::ActionCount,
            transactions::Column::Status,
            transactions::Column::ErrorCode,
            transactions::Column::FailedActionNumber,
            transactions::Column::Timestamp,
        ])
        .column_as(blocks::Column::BlockNumber, "block_number")
        .join(JoinType::InnerJoin, transactions::Relation::Block.def())
}

/// Repository for transaction, block and address operations
pub struct TransactionRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TransactionRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        TransactionRepository { conn }
    }

    /// Retrieves a transaction by hash
    pub async fn get_by_hash(&self, hash: &str) -> Result<Option<TransactionRecord>, DbError> {
        let row = transactions_with_block()
            .filter(transactions::Column::Hash.eq(hash))
            .into_model::<TransactionRow>()
            .one(self.conn)
            .await?;
        Ok(row.map(TransactionRecord::from))
    }

    /// Retrieves one page of transactions, newest first
    pub async fn get_paginated(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Vec<TransactionRecord>, DbError> {
        let rows = transactions_with_block()
            .order_by_desc(transactions::Column::TxId)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .into_model::<TransactionRow>()
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(TransactionRecord::from).collect())
    }

    pub async fn transaction_exists(&self, hash: &str) -> Result<bool, DbError> {
        let count = transactions::Entity::find()
            .filter(transactions::Column::Hash.eq(hash))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    /// Retrieves a block by its number
    pub async fn get_block(&self, block_number: i64) -> Result<Option<BlockRecord>, DbError> {
        let block = blocks::Entity::find()
            .filter(blocks::Column::BlockNumber.eq(block_number))
            .one(self.conn)
            .await?;
        Ok(block.map(BlockRecord::from))
    }

    /// Retrieves one page of blocks, highest number first
    pub async fn get_blocks_paginated(
        &self,
        pagination: &PaginationParams,
    ) -> Result<Vec<BlockRecord>, DbError> {
        let blocks = blocks::Entity::find()
            .order_by_desc(blocks::Column::BlockNumber)
            .limit(pagination.limit)
            .offset(pagination.offset())
            .all(self.conn)
            .await?;
        Ok(blocks.into_iter().map(BlockRecord::from).collect())
    }

    pub async fn block_exists(&self, block_number: i64) -> Result<bool, DbError> {
        let count = blocks::Entity::find()
            .filter(blocks::Column::BlockNumber.eq(block_number))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    /// Retrieves an address by its blockchain address string
    pub async fn get_address(
        &self,
        blockchain_address: &str,
    ) -> Result<Option<AddressRecord>, DbError> {
        let address = addresses::Entity::find()
            .filter(addresses::Column::BlockchainAddress.eq(blockchain_address))
            .one(self.conn)
            .await?;
        Ok(address.map(|model| AddressRecord {
            blockchain_address: model.blockchain_address,
            nonce: model.nonce,
            available_balance: model.available_balance,
            deposit_balance: model.deposit_balance,
            staked_balance: model.staked_balance,
        }))
    }

    pub async fn address_exists(&self, blockchain_address: &str) -> Result<bool, DbError> {
        let count = addresses::Entity::find()
            .filter(addresses::Column::BlockchainAddress.eq(blockchain_address))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
