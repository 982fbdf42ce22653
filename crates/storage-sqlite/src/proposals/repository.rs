use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use fabriq_core::proposals::{Proposal, ProposalRepositoryTrait, ProposalStatus};
use fabriq_core::Result;

use super::model::ProposalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::proposals;

pub struct ProposalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProposalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProposalRepository { pool, writer }
    }
}

#[async_trait]
impl ProposalRepositoryTrait for ProposalRepository {
    fn find_by_id(&self, proposal_id: &str) -> Result<Option<Proposal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = proposals::table
            .find(proposal_id)
            .first::<ProposalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Proposal::from))
    }

    fn find_by_target_and_bidder(
        &self,
        target_id: &str,
        bidder_id: &str,
    ) -> Result<Option<Proposal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = proposals::table
            .filter(proposals::target_id.eq(target_id))
            .filter(proposals::bidder_id.eq(bidder_id))
            .first::<ProposalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Proposal::from))
    }

    fn list_by_target(&self, target_id: &str) -> Result<Vec<Proposal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = proposals::table
            .filter(proposals::target_id.eq(target_id))
            .order(proposals::created_at.desc())
            .load::<ProposalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Proposal::from).collect())
    }

    fn list_by_bidder(&self, bidder_id: &str) -> Result<Vec<Proposal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = proposals::table
            .filter(proposals::bidder_id.eq(bidder_id))
            .order(proposals::created_at.desc())
            .load::<ProposalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Proposal::from).collect())
    }

    fn has_accepted_for_target(&self, target_id: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = proposals::table
            .filter(proposals::target_id.eq(target_id))
            .filter(proposals::status.eq(ProposalStatus::Accepted.as_str()))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn insert(&self, proposal: Proposal) -> Result<Proposal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Proposal> {
                // The unique index over (target_id, bidder_id) rejects a
                // concurrent duplicate here, after any advisory check passed.
                diesel::insert_into(proposals::table)
                    .values(ProposalDB::from(&proposal))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(proposal)
            })
            .await
    }

    async fn update(&self, proposal: Proposal) -> Result<Proposal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Proposal> {
                let proposal_db = ProposalDB::from(&proposal);
                diesel::update(proposals::table.find(&proposal.id))
                    .set(&proposal_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(proposal)
            })
            .await
    }
}
