use crate::errors::Result;
use crate::proposals::proposals_model::{NewProposal, Proposal, ProposalStatus, ProposalUpdate};
use async_trait::async_trait;

/// Trait for proposal repository operations.
#[async_trait]
pub trait ProposalRepositoryTrait: Send + Sync {
    fn find_by_id(&self, proposal_id: &str) -> Result<Option<Proposal>>;
    fn find_by_target_and_bidder(
        &self,
        target_id: &str,
        bidder_id: &str,
    ) -> Result<Option<Proposal>>;
    fn list_by_target(&self, target_id: &str) -> Result<Vec<Proposal>>;
    fn list_by_bidder(&self, bidder_id: &str) -> Result<Vec<Proposal>>;
    fn has_accepted_for_target(&self, target_id: &str) -> Result<bool>;
    /// Insert backed by the storage-level unique index over
    /// `(target_id, bidder_id)`; a concurrent duplicate surfaces as
    /// `DatabaseError::UniqueViolation`, never as a second row.
    async fn insert(&self, proposal: Proposal) -> Result<Proposal>;
    async fn update(&self, proposal: Proposal) -> Result<Proposal>;
}

/// Trait for proposal service operations (the ledger).
#[async_trait]
pub trait ProposalServiceTrait: Send + Sync {
    async fn create_proposal(&self, bidder_id: &str, new_proposal: NewProposal) -> Result<Proposal>;
    async fn update_proposal(
        &self,
        proposal_id: &str,
        requester_id: &str,
        update: ProposalUpdate,
    ) -> Result<Proposal>;
    async fn set_status(
        &self,
        proposal_id: &str,
        requester_id: &str,
        new_status: ProposalStatus,
    ) -> Result<Proposal>;
    fn list_for_target(&self, target_id: &str, requester_id: &str) -> Result<Vec<Proposal>>;
    fn list_for_bidder(&self, bidder_id: &str) -> Result<Vec<Proposal>>;
}
