// Account, asset and holding/eligibility queries

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::db::error::DbError;
use crate::entity::{accounts, assets, holding_eligibilities};
use crate::models::{AccountRecord, AssetRecord, HoldingEligibilityRecord, HoldingScope};

/// Repository for accounts, assets and the holdings linking them
pub struct AssetRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Find account by hash
    pub async fn find_account(&self, hash: &str) -> Result<Option<AccountRecord>, DbError> {
        let account = accounts::Entity::find()
            .filter(accounts::Column::Hash.eq(hash))
            .one(self.conn)
            .await?;

        Ok(account.map(|model| AccountRecord {
            hash: model.hash,
            controller_address: model.controller_address,
        }))
    }

    /// Find asset by hash
    pub async fn find_asset(&self, hash: &str) -> Result<Option<AssetRecord>, DbError> {
        let asset = assets::Entity::find()
            .filter(assets::Column::Hash.eq(hash))
            .one(self.conn)
            .await?;

        Ok(asset.map(|model| AssetRecord {
            hash: model.hash,
            asset_code: model.asset_code,
            is_eligibility_required: model.is_eligibility_required,
            controller_address: model.controller_address,
        }))
    }

    /// Find the holding/eligibility rows of one account or one asset
    pub async fn find_holding_eligibilities(
        &self,
        scope: &HoldingScope,
    ) -> Result<Vec<HoldingEligibilityRecord>, DbError> {
        let query = match scope {
            HoldingScope::Account(hash) => holding_eligibilities::Entity::find()
                .filter(holding_eligibilities::Column::AccountHash.eq(hash.as_str())),
            HoldingScope::Asset(hash) => holding_eligibilities::Entity::find()
                .filter(holding_eligibilities::Column::AssetHash.eq(hash.as_str())),
        };

        let rows = query
            .order_by_asc(holding_eligibilities::Column::HoldingEligibilityId)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|model| HoldingEligibilityRecord {
                account_hash: model.account_hash,
                asset_hash: model.asset_hash,
                balance: model.balance,
                is_primary_eligible: model.is_primary_eligible,
                is_secondary_eligible: model.is_secondary_eligible,
                kyc_controller_address: model.kyc_controller_address,
            })
            .collect())
    }

    pub async fn account_exists(&self, hash: &str) -> Result<bool, DbError> {
        let count = accounts::Entity::find()
            .filter(accounts::Column::Hash.eq(hash))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    pub async fn asset_exists(&self, hash: &str) -> Result<bool, DbError> {
        let count = assets::Entity::find()
            .filter(assets::Column::Hash.eq(hash))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
