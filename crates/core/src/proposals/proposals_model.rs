//! Proposal domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::orders::OrderKind;

/// Proposal lifecycle status. `pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ProposalStatus::Pending),
            "accepted" => Some(ProposalStatus::Accepted),
            "rejected" => Some(ProposalStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProposalStatus::Accepted | ProposalStatus::Rejected)
    }

    /// Check if a transition to another status is valid.
    ///
    /// Repeating a terminal status is deliberately invalid so that client
    /// double-submissions surface instead of silently succeeding.
    pub fn can_transition_to(&self, to: &Self) -> bool {
        matches!(
            (self, to),
            (ProposalStatus::Pending, ProposalStatus::Accepted)
                | (ProposalStatus::Pending, ProposalStatus::Rejected)
        )
    }
}

/// A bidder's priced counter-offer against an order's baseline. Called a
/// "bid" when a vendor targets a project and an "offer" when a technician
/// targets a project or service; one model covers both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub target_kind: OrderKind,
    pub target_id: String,
    pub bidder_id: String,
    /// Asked price in integer currency units.
    pub price: i64,
    /// Proposed execution duration in days.
    pub days: i32,
    pub message: Option<String>,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for submitting a proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProposal {
    pub target_kind: OrderKind,
    pub target_id: String,
    pub price: i64,
    pub days: i32,
    #[serde(default)]
    pub message: Option<String>,
}

/// Replacement terms for an existing pending proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalUpdate {
    pub price: i64,
    pub days: i32,
    #[serde(default)]
    pub message: Option<String>,
}
