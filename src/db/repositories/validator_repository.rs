// Validator and equivocation queries

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::db::error::DbError;
use crate::entity::{equivocations, validators};
use crate::models::{EquivocationRecord, ValidatorFilter, ValidatorRecord};

pub struct ValidatorRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ValidatorRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Live (not soft-deleted) validators matching the filter
    pub async fn find_live(&self, filter: &ValidatorFilter) -> Result<Vec<ValidatorRecord>, DbError> {
        let mut query = validators::Entity::find().filter(validators::Column::IsDeleted.eq(false));

        if let Some(address) = &filter.blockchain_address {
            query = query.filter(validators::Column::BlockchainAddress.eq(address.as_str()));
        }

        let rows = query
            .order_by_asc(validators::Column::ValidatorId)
            .all(self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|model| ValidatorRecord {
                blockchain_address: model.blockchain_address,
                network_address: model.network_address,
                shared_reward_percent: model.shared_reward_percent,
                is_active: model.is_active,
            })
            .collect())
    }

    pub async fn find_equivocation(
        &self,
        proof_hash: &str,
    ) -> Result<Option<EquivocationRecord>, DbError> {
        let equivocation = equivocations::Entity::find()
            .filter(equivocations::Column::EquivocationProofHash.eq(proof_hash))
            .one(self.conn)
            .await?;

        Ok(equivocation.map(|model| EquivocationRecord {
            equivocation_proof_hash: model.equivocation_proof_hash,
            validator_address: model.validator_address,
            block_number: model.block_number,
            consensus_round: model.consensus_round,
            consensus_step: model.consensus_step,
        }))
    }

    pub async fn equivocation_exists(&self, proof_hash: &str) -> Result<bool, DbError> {
        let count = equivocations::Entity::find()
            .filter(equivocations::Column::EquivocationProofHash.eq(proof_hash))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
