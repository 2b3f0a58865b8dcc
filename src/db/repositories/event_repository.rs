// Event log queries
// Events are always loaded together with their address, action and referenced entity hash.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::db::error::DbError;
use crate::entity::{accounts, addresses, assets, blockchain_events, equivocations, tx_actions};
use crate::models::{AmountSign, EventFilter, EventRecord};

#[derive(Debug, FromQueryResult)]
struct EventRow {
    blockchain_event_id: i64,
    event_type: String,
    amount: Option<Decimal>,
    tx_action_id: i64,
    blockchain_address: String,
    action_type: String,
    account_hash: Option<String>,
    asset_hash: Option<String>,
    equivocation_proof_hash: Option<String>,
}

impl From<EventRow> for EventRecord {
    fn from(row: EventRow) -> Self {
        EventRecord {
            id: row.blockchain_event_id,
            event_type: row.event_type.as_str().into(),
            amount: row.amount,
            address: row.blockchain_address,
            tx_action_id: row.tx_action_id,
            action_type: row.action_type.as_str().into(),
            account_hash: row.account_hash,
            asset_hash: row.asset_hash,
            equivocation_proof_hash: row.equivocation_proof_hash,
        }
    }
}

/// Repository for the blockchain event log
pub struct EventRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        EventRepository { conn }
    }

    /// Retrieves every event matching the filter, ordered by event id
    pub async fn find(&self, filter: &EventFilter) -> Result<Vec<EventRecord>, DbError> {
        if matches!(&filter.tx_action_ids, Some(ids) if ids.is_empty()) {
            return Ok(Vec::new());
        }

        let rows = event_query(filter)
            .into_model::<EventRow>()
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(EventRecord::from).collect())
    }
}

/// Events joined with their address, action and referenced entity, narrowed by
/// every set field of `filter`, oldest first
fn event_query(filter: &EventFilter) -> Select<blockchain_events::Entity> {
    let mut query = blockchain_events::Entity::find()
        .select_only()
        .column(blockchain_events::Column::BlockchainEventId)
        .column(blockchain_events::Column::EventType)
        .column(blockchain_events::Column::Amount)
        .column(blockchain_events::Column::TxActionId)
        .column_as(addresses::Column::BlockchainAddress, "blockchain_address")
        .column_as(tx_actions::Column::ActionType, "action_type")
        .column_as(accounts::Column::Hash, "account_hash")
        .column_as(assets::Column::Hash, "asset_hash")
        .column_as(
            equivocations::Column::EquivocationProofHash,
            "equivocation_proof_hash",
        )
        .join(JoinType::InnerJoin, blockchain_events::Relation::Address.def())
        .join(JoinType::InnerJoin, blockchain_events::Relation::TxAction.def())
        .join(JoinType::LeftJoin, blockchain_events::Relation::Account.def())
        .join(JoinType::LeftJoin, blockchain_events::Relation::Asset.def())
        .join(JoinType::LeftJoin, blockchain_events::Relation::Equivocation.def());

    if let Some(hash) = &filter.account_hash {
        query = query.filter(accounts::Column::Hash.eq(hash.as_str()));
    }
    if let Some(hash) = &filter.asset_hash {
        query = query.filter(assets::Column::Hash.eq(hash.as_str()));
    }
    if let Some(proof_hash) = &filter.equivocation_proof_hash {
        query = query.filter(equivocations::Column::EquivocationProofHash.eq(proof_hash.as_str()));
    }
    if let Some(address) = &filter.address {
        query = query.filter(addresses::Column::BlockchainAddress.eq(address.as_str()));
    }
    if !filter.action_types.is_empty() {
        let names: Vec<String> = filter
            .action_types
            .iter()
            .map(|action_type| action_type.as_str().to_string())
            .collect();
        query = query.filter(tx_actions::Column::ActionType.is_in(names));
    }
    match filter.amount_sign {
        Some(AmountSign::Positive) => {
            query = query.filter(blockchain_events::Column::Amount.gt(Decimal::ZERO));
        }
        Some(AmountSign::Negative) => {
            query = query.filter(blockchain_events::Column::Amount.lt(Decimal::ZERO));
        }
        None => {}
    }
    if let Some(ids) = &filter.tx_action_ids {
        query = query.filter(blockchain_events::Column::TxActionId.is_in(ids.clone()));
    }

    query.order_by_asc(blockchain_events::Column::BlockchainEventId)
}
