//! Order domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::orders_errors::OrderError;
use crate::pricing::ParametricItem;

/// What kind of work an order asks for. Projects are fabrication requests
/// bid on by vendors; services are labor requests offered on by technicians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Project,
    Service,
}

impl OrderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Project => "project",
            OrderKind::Service => "service",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "project" => Some(OrderKind::Project),
            "service" => Some(OrderKind::Service),
            _ => None,
        }
    }
}

/// The negotiated aggregate: one primary item, optional additional items,
/// and a cached total that is re-derived on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub owner_id: String,
    pub kind: OrderKind,
    /// Execution duration ceiling in days; 0 means unconstrained.
    pub days: i32,
    pub primary_item: ParametricItem,
    pub items: Vec<ParametricItem>,
    /// Cached grand total in integer currency units.
    pub total: i64,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// The negotiation baseline. Hard failure on an incomplete primary item;
    /// previews that want a soft 0 go through the pricing engine directly.
    pub fn baseline_total(&self) -> Result<i64, OrderError> {
        if !self.primary_item.is_complete() {
            return Err(OrderError::Incomplete(self.id.clone()));
        }
        Ok(self.total)
    }
}

/// Input model for creating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub kind: OrderKind,
    #[serde(default)]
    pub days: i32,
    pub primary_item: ParametricItem,
    #[serde(default)]
    pub items: Vec<ParametricItem>,
}

/// Differential payload for editing an order. Absent fields keep their
/// current value; the total is re-derived regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub days: Option<i32>,
    pub primary_item: Option<ParametricItem>,
    pub items: Option<Vec<ParametricItem>>,
}
