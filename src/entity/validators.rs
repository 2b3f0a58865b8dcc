use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "validator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub validator_id: i64,
    #[sea_orm(column_type = "Text")]
    pub blockchain_address: String,
    #[sea_orm(column_type = "Text")]
    pub network_address: String,
    pub shared_reward_percent: Decimal,
    pub is_active: bool,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
