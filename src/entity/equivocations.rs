use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equivocation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub equivocation_id: i64,
    #[sea_orm(column_type = "Text", unique)]
    pub equivocation_proof_hash: String,
    #[sea_orm(column_type = "Text")]
    pub validator_address: String,
    pub block_number: i64,
    pub consensus_round: i32,
    pub consensus_step: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
