//! API error mapping.
//!
//! Business-rule failures from the core surface as stable error codes with
//! the computed bounds attached, so clients can render actionable inline
//! messages. Storage failures collapse to a generic 500 and are logged here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use fabriq_core::errors::Error as CoreError;
use fabriq_core::orders::OrderError;
use fabriq_core::proposals::ProposalError;

pub type ApiResult<T> = Result<T, ApiError>;

pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    details: Option<serde_json::Value>,
}

impl ApiError {
    fn new(status: StatusCode, code: &'static str, message: String) -> Self {
        ApiError {
            status,
            code,
            message,
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn unauthenticated(message: &str) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "UNAUTHENTICATED",
            message.to_string(),
        )
    }

    pub fn forbidden(message: &str) -> Self {
        Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", message.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Order(order_err) => {
                let message = order_err.to_string();
                match order_err {
                    OrderError::NotFound(_) => {
                        Self::new(StatusCode::NOT_FOUND, "ORDER_NOT_FOUND", message)
                    }
                    OrderError::Incomplete(_) => {
                        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "INCOMPLETE_ORDER", message)
                    }
                    OrderError::Locked(_) => {
                        Self::new(StatusCode::CONFLICT, "ORDER_LOCKED", message)
                    }
                    OrderError::Forbidden(_) => {
                        Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", message)
                    }
                }
            }
            CoreError::Proposal(proposal_err) => {
                let message = proposal_err.to_string();
                match proposal_err {
                    ProposalError::TargetNotFound(_) => {
                        Self::new(StatusCode::NOT_FOUND, "TARGET_NOT_FOUND", message)
                    }
                    ProposalError::NotFound(_) => {
                        Self::new(StatusCode::NOT_FOUND, "PROPOSAL_NOT_FOUND", message)
                    }
                    ProposalError::Duplicate { .. } => {
                        Self::new(StatusCode::CONFLICT, "DUPLICATE_PROPOSAL", message)
                    }
                    ProposalError::PriceOutOfRange { min, max, .. } => Self::new(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "PRICE_OUT_OF_RANGE",
                        message,
                    )
                    .with_details(json!({ "min": min, "max": max })),
                    ProposalError::DaysOutOfRange { min, max, .. } => Self::new(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "DAYS_OUT_OF_RANGE",
                        message,
                    )
                    .with_details(json!({ "min": min, "max": max })),
                    ProposalError::Locked { .. } => {
                        Self::new(StatusCode::CONFLICT, "PROPOSAL_LOCKED", message)
                    }
                    ProposalError::InvalidTransition { .. } => {
                        Self::new(StatusCode::CONFLICT, "INVALID_TRANSITION", message)
                    }
                    ProposalError::Forbidden(_) => {
                        Self::new(StatusCode::FORBIDDEN, "FORBIDDEN", message)
                    }
                }
            }
            CoreError::Validation(validation_err) => Self::new(
                StatusCode::BAD_REQUEST,
                "VALIDATION_FAILED",
                validation_err.to_string(),
            ),
            other => {
                tracing::error!(error = %other, "internal error");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "internal error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
                "details": self.details,
            }
        });
        (self.status, Json(body)).into_response()
    }
}
