//! Notification payloads emitted by the proposal ledger.

use serde::{Deserialize, Serialize};

use crate::proposals::Proposal;

/// A message addressed to one principal. Delivery is an external concern;
/// the core only shapes the payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub recipient_id: String,
    pub title: String,
    pub body: String,
    pub meta: serde_json::Value,
}

impl Notification {
    /// Addressed to the order owner when a new proposal lands on their order.
    pub fn proposal_received(owner_id: &str, proposal: &Proposal) -> Self {
        Notification {
            recipient_id: owner_id.to_string(),
            title: "New proposal received".to_string(),
            body: format!(
                "You received a proposal of {} over {} day(s)",
                proposal.price, proposal.days
            ),
            meta: serde_json::json!({
                "proposalId": proposal.id,
                "targetId": proposal.target_id,
                "bidderId": proposal.bidder_id,
                "price": proposal.price,
            }),
        }
    }

    /// Addressed to the bidder when the owner resolves their proposal.
    pub fn proposal_status_changed(proposal: &Proposal) -> Self {
        Notification {
            recipient_id: proposal.bidder_id.clone(),
            title: format!("Proposal {}", proposal.status.as_str()),
            body: format!(
                "Your proposal of {} was {}",
                proposal.price,
                proposal.status.as_str()
            ),
            meta: serde_json::json!({
                "proposalId": proposal.id,
                "targetId": proposal.target_id,
                "status": proposal.status.as_str(),
            }),
        }
    }
}
