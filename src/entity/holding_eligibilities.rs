//! Per (account, asset) holding and eligibility state, maintained by ingestion

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "holding_eligibility")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub holding_eligibility_id: i64,
    pub account_id: i64,
    pub asset_id: i64,
    #[sea_orm(column_type = "Text")]
    pub account_hash: String,
    #[sea_orm(column_type = "Text")]
    pub asset_hash: String,
    #[sea_orm(nullable)]
    pub balance: Option<Decimal>,
    #[sea_orm(nullable)]
    pub is_primary_eligible: Option<bool>,
    #[sea_orm(nullable)]
    pub is_secondary_eligible: Option<bool>,
    #[sea_orm(column_type = "Text", nullable)]
    pub kyc_controller_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
