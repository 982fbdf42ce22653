use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::proposals_errors::ProposalError;
use super::proposals_model::{NewProposal, Proposal, ProposalStatus, ProposalUpdate};
use super::proposals_traits::{ProposalRepositoryTrait, ProposalServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use crate::notifications::{Notification, NotificationSink};
use crate::orders::{Order, OrderKind, OrderRepositoryTrait};

/// The proposal ledger: validates terms against the target order's current
/// baseline, enforces one proposal per (target, bidder), and drives the
/// pending -> accepted/rejected state machine.
pub struct ProposalService<P: ProposalRepositoryTrait, O: OrderRepositoryTrait> {
    proposal_repo: Arc<P>,
    order_repo: Arc<O>,
    notifier: Arc<dyn NotificationSink>,
}

impl<P: ProposalRepositoryTrait, O: OrderRepositoryTrait> ProposalService<P, O> {
    pub fn new(
        proposal_repo: Arc<P>,
        order_repo: Arc<O>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        ProposalService {
            proposal_repo,
            order_repo,
            notifier,
        }
    }

    /// Resolve a live order of the expected kind, or `TargetNotFound`.
    fn resolve_target(&self, kind: OrderKind, target_id: &str) -> Result<Order> {
        self.order_repo
            .find_by_id(target_id)?
            .filter(|order| !order.is_deleted && order.kind == kind)
            .ok_or_else(|| ProposalError::TargetNotFound(target_id.to_string()).into())
    }

    /// Price must sit within [baseline, 2 * baseline], days within
    /// [1, order.days] (or just >= 1 when the order is unconstrained).
    fn validate_terms(order: &Order, baseline: i64, price: i64, days: i32) -> Result<()> {
        let max_price = baseline.saturating_mul(2);
        if price < baseline || price > max_price {
            return Err(ProposalError::PriceOutOfRange {
                price,
                min: baseline,
                max: max_price,
            }
            .into());
        }

        let max_days = (order.days > 0).then_some(order.days);
        if days < 1 || max_days.is_some_and(|max| days > max) {
            return Err(ProposalError::DaysOutOfRange {
                days,
                min: 1,
                max: max_days,
            }
            .into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<P: ProposalRepositoryTrait, O: OrderRepositoryTrait> ProposalServiceTrait
    for ProposalService<P, O>
{
    async fn create_proposal(
        &self,
        bidder_id: &str,
        new_proposal: NewProposal,
    ) -> Result<Proposal> {
        let order = self.resolve_target(new_proposal.target_kind, &new_proposal.target_id)?;
        // Baseline resolution comes before everything else: an order that
        // cannot produce a baseline is not biddable at all.
        let baseline = order.baseline_total()?;

        // Advisory duplicate check for a friendly error; the unique index on
        // (target_id, bidder_id) is the authoritative guard under races.
        if self
            .proposal_repo
            .find_by_target_and_bidder(&new_proposal.target_id, bidder_id)?
            .is_some()
        {
            return Err(ProposalError::Duplicate {
                target_id: new_proposal.target_id,
                bidder_id: bidder_id.to_string(),
            }
            .into());
        }

        Self::validate_terms(&order, baseline, new_proposal.price, new_proposal.days)?;

        let target_id = new_proposal.target_id.clone();
        let now = Utc::now();
        let proposal = Proposal {
            id: Uuid::new_v4().to_string(),
            target_kind: new_proposal.target_kind,
            target_id: new_proposal.target_id,
            bidder_id: bidder_id.to_string(),
            price: new_proposal.price,
            days: new_proposal.days,
            message: new_proposal.message,
            status: ProposalStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let created = match self.proposal_repo.insert(proposal).await {
            Ok(created) => created,
            Err(Error::Database(DatabaseError::UniqueViolation(_))) => {
                return Err(ProposalError::Duplicate {
                    target_id,
                    bidder_id: bidder_id.to_string(),
                }
                .into());
            }
            Err(e) => return Err(e),
        };

        debug!(
            "proposal {} created on {} by {}",
            created.id, created.target_id, created.bidder_id
        );
        self.notifier
            .notify(Notification::proposal_received(&order.owner_id, &created))
            .await;
        Ok(created)
    }

    async fn update_proposal(
        &self,
        proposal_id: &str,
        requester_id: &str,
        update: ProposalUpdate,
    ) -> Result<Proposal> {
        let mut proposal = self
            .proposal_repo
            .find_by_id(proposal_id)?
            .ok_or_else(|| ProposalError::NotFound(proposal_id.to_string()))?;

        if proposal.bidder_id != requester_id {
            return Err(ProposalError::Forbidden(format!(
                "only the original bidder may edit proposal {}",
                proposal_id
            ))
            .into());
        }
        if proposal.status.is_terminal() {
            return Err(ProposalError::Locked {
                id: proposal.id,
                status: proposal.status.as_str().to_string(),
            }
            .into());
        }

        // Terms are re-validated against the baseline as it stands now, not
        // as it stood at creation; the owner may have edited the order.
        let order = self.resolve_target(proposal.target_kind, &proposal.target_id)?;
        let baseline = order.baseline_total()?;
        Self::validate_terms(&order, baseline, update.price, update.days)?;

        proposal.price = update.price;
        proposal.days = update.days;
        proposal.message = update.message;
        proposal.updated_at = Utc::now();
        self.proposal_repo.update(proposal).await
    }

    async fn set_status(
        &self,
        proposal_id: &str,
        requester_id: &str,
        new_status: ProposalStatus,
    ) -> Result<Proposal> {
        let mut proposal = self
            .proposal_repo
            .find_by_id(proposal_id)?
            .ok_or_else(|| ProposalError::NotFound(proposal_id.to_string()))?;

        let order = self
            .order_repo
            .find_by_id(&proposal.target_id)?
            .ok_or_else(|| ProposalError::TargetNotFound(proposal.target_id.clone()))?;
        if order.owner_id != requester_id {
            return Err(ProposalError::Forbidden(format!(
                "only the order owner may resolve proposal {}",
                proposal_id
            ))
            .into());
        }

        if !proposal.status.can_transition_to(&new_status) {
            return Err(ProposalError::InvalidTransition {
                from: proposal.status.as_str().to_string(),
                to: new_status.as_str().to_string(),
            }
            .into());
        }

        proposal.status = new_status;
        proposal.updated_at = Utc::now();
        let updated = self.proposal_repo.update(proposal).await?;

        debug!("proposal {} moved to {}", updated.id, updated.status.as_str());
        self.notifier
            .notify(Notification::proposal_status_changed(&updated))
            .await;
        Ok(updated)
    }

    fn list_for_target(&self, target_id: &str, requester_id: &str) -> Result<Vec<Proposal>> {
        let order = self
            .order_repo
            .find_by_id(target_id)?
            .filter(|order| !order.is_deleted)
            .ok_or_else(|| ProposalError::TargetNotFound(target_id.to_string()))?;
        if order.owner_id != requester_id {
            return Err(ProposalError::Forbidden(format!(
                "only the order owner may list proposals for {}",
                target_id
            ))
            .into());
        }
        self.proposal_repo.list_by_target(target_id)
    }

    fn list_for_bidder(&self, bidder_id: &str) -> Result<Vec<Proposal>> {
        self.proposal_repo.list_by_bidder(bidder_id)
    }
}
