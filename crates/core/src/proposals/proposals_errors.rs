use thiserror::Error;

/// Proposal business-rule failures.
///
/// Range violations carry the computed bounds so callers can render an
/// actionable message next to the offending field.
#[derive(Error, Debug)]
pub enum ProposalError {
    #[error("Target order not found: {0}")]
    TargetNotFound(String),

    #[error("Proposal not found: {0}")]
    NotFound(String),

    #[error("Bidder {bidder_id} already has a proposal for target {target_id}")]
    Duplicate {
        target_id: String,
        bidder_id: String,
    },

    #[error("Price {price} is outside the allowed range [{min}, {max}]")]
    PriceOutOfRange { price: i64, min: i64, max: i64 },

    #[error("Days {days} is outside the allowed range [{min}, {}]", max.map_or("unbounded".to_string(), |m| m.to_string()))]
    DaysOutOfRange {
        days: i32,
        min: i32,
        max: Option<i32>,
    },

    #[error("Proposal {id} is {status} and can no longer be modified")]
    Locked { id: String, status: String },

    #[error("Invalid status transition: cannot move from '{from}' to '{to}'")]
    InvalidTransition { from: String, to: String },

    #[error("Not allowed: {0}")]
    Forbidden(String),
}
