//! SeaORM entity for the append-only `blockchain_event` log
//!
//! Rows are written by the ingestion pipeline and never updated. Exactly one of
//! `account_id`, `asset_id` and `equivocation_id` is set, depending on the event type.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blockchain_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub blockchain_event_id: i64,
    #[sea_orm(column_type = "Text")]
    pub event_type: String,
    #[sea_orm(nullable)]
    pub amount: Option<Decimal>,
    pub address_id: i64,
    pub tx_action_id: i64,
    pub block_id: i64,
    #[sea_orm(nullable)]
    pub account_id: Option<i64>,
    #[sea_orm(nullable)]
    pub asset_id: Option<i64>,
    #[sea_orm(nullable)]
    pub equivocation_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::addresses::Entity",
        from = "Column::AddressId",
        to = "super::addresses::Column::AddressId"
    )]
    Address,
    #[sea_orm(
        belongs_to = "super::tx_actions::Entity",
        from = "Column::TxActionId",
        to = "super::tx_actions::Column::TxActionId"
    )]
    TxAction,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::AccountId"
    )]
    Account,
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::AssetId",
        to = "super::assets::Column::AssetId"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::equivocations::Entity",
        from = "Column::EquivocationId",
        to = "super::equivocations::Column::EquivocationId"
    )]
    Equivocation,
}

impl ActiveModelBehavior for ActiveModel {}
