//! Principal extraction and role rules.
//!
//! Authentication itself is an upstream concern: the deployment fronts this
//! service with a gateway that verifies the session and forwards the
//! resolved principal in trusted headers. This layer only reads that
//! resolution and enforces role and ownership rules on top of it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fabriq_core::orders::OrderKind;

use crate::error::ApiError;

pub const PRINCIPAL_ID_HEADER: &str = "x-principal-id";
pub const PRINCIPAL_ROLE_HEADER: &str = "x-principal-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Vendor,
    Technician,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(Role::Customer),
            "vendor" => Some(Role::Vendor),
            "technician" => Some(Role::Technician),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: String,
    pub role: Role,
}

impl Principal {
    /// Vendors bid on projects; technicians offer on projects and services.
    pub fn may_bid_on(&self, kind: OrderKind) -> bool {
        match self.role {
            Role::Vendor => kind == OrderKind::Project,
            Role::Technician => true,
            Role::Customer | Role::Admin => false,
        }
    }

    pub fn may_create_orders(&self) -> bool {
        matches!(self.role, Role::Customer | Role::Admin)
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(PRINCIPAL_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApiError::unauthenticated("missing principal"))?
            .to_string();

        let role = parts
            .headers
            .get(PRINCIPAL_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(Role::parse)
            .ok_or_else(|| ApiError::unauthenticated("missing or unknown principal role"))?;

        Ok(Principal { id, role })
    }
}
