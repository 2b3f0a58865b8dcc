use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tx")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tx_id: i64,
    #[sea_orm(column_type = "Text", unique)]
    pub hash: String,
    #[sea_orm(column_type = "Text")]
    pub sender_address: String,
    pub nonce: i64,
    pub action_fee: Decimal,
    pub action_count: i16,
    #[sea_orm(column_type = "Text")]
    pub status: String,
    #[sea_orm(nullable)]
    pub error_code: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub failed_action_number: Option<String>,
    pub block_id: i64,
    pub timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blocks::Entity",
        from = "Column::BlockId",
        to = "super::blocks::Column::BlockId"
    )]
    Block,
}

impl Related<super::blocks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Block.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
