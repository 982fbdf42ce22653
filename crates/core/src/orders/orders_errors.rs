use thiserror::Error;

/// Order business-rule failures. These are returned as typed values and are
/// never retried automatically.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Incomplete order: {0}")]
    Incomplete(String),

    #[error("Order {0} is locked: a proposal on it has been accepted")]
    Locked(String),

    #[error("Not allowed: {0}")]
    Forbidden(String),
}
