use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tx_action")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub tx_action_id: i64,
    pub tx_id: i64,
    pub action_number: i16,
    #[sea_orm(column_type = "Text")]
    pub action_type: String,
    pub action_data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
