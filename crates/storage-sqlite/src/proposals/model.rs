//! Database models for proposals.

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use log::warn;

use fabriq_core::orders::OrderKind;
use fabriq_core::proposals::{Proposal, ProposalStatus};

/// Database model for proposals.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::proposals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProposalDB {
    pub id: String,
    pub target_kind: String,
    pub target_id: String,
    pub bidder_id: String,
    pub price: i64,
    pub days: i32,
    pub message: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ProposalDB> for Proposal {
    fn from(db: ProposalDB) -> Self {
        let status = ProposalStatus::parse(&db.status).unwrap_or_else(|| {
            warn!("proposal {} has unknown status '{}'", db.id, db.status);
            ProposalStatus::Pending
        });
        let target_kind = OrderKind::parse(&db.target_kind).unwrap_or_else(|| {
            warn!(
                "proposal {} has unknown target kind '{}'",
                db.id, db.target_kind
            );
            OrderKind::Project
        });

        Proposal {
            id: db.id,
            target_kind,
            target_id: db.target_id,
            bidder_id: db.bidder_id,
            price: db.price,
            days: db.days,
            message: db.message,
            status,
            created_at: DateTime::<Utc>::from_naive_utc_and_offset(db.created_at, Utc),
            updated_at: DateTime::<Utc>::from_naive_utc_and_offset(db.updated_at, Utc),
        }
    }
}

impl From<&Proposal> for ProposalDB {
    fn from(proposal: &Proposal) -> Self {
        ProposalDB {
            id: proposal.id.clone(),
            target_kind: proposal.target_kind.as_str().to_string(),
            target_id: proposal.target_id.clone(),
            bidder_id: proposal.bidder_id.clone(),
            price: proposal.price,
            days: proposal.days,
            message: proposal.message.clone(),
            status: proposal.status.as_str().to_string(),
            created_at: proposal.created_at.naive_utc(),
            updated_at: proposal.updated_at.naive_utc(),
        }
    }
}
