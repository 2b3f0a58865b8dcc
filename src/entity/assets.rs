use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "asset")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub asset_id: i64,
    #[sea_orm(column_type = "Text", unique)]
    pub hash: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub asset_code: Option<String>,
    #[sea_orm(nullable)]
    pub is_eligibility_required: Option<bool>,
    #[sea_orm(column_type = "Text", nullable)]
    pub controller_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
