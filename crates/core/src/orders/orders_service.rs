use std::sync::Arc;

use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::orders_errors::OrderError;
use super::orders_model::{NewOrder, Order, OrderUpdate};
use super::orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::pricing::{ParametricItem, PricingService};
use crate::proposals::ProposalRepositoryTrait;

/// Service for managing orders. Owns the completeness gate and keeps the
/// cached total in sync with every mutation.
pub struct OrderService<O: OrderRepositoryTrait, P: ProposalRepositoryTrait> {
    order_repo: Arc<O>,
    proposal_repo: Arc<P>,
    pricing: Arc<PricingService>,
}

impl<O: OrderRepositoryTrait, P: ProposalRepositoryTrait> OrderService<O, P> {
    pub fn new(order_repo: Arc<O>, proposal_repo: Arc<P>, pricing: Arc<PricingService>) -> Self {
        OrderService {
            order_repo,
            proposal_repo,
            pricing,
        }
    }

    fn validate_days(days: i32) -> Result<()> {
        if days < 0 {
            return Err(
                ValidationError::InvalidInput("days must be zero or positive".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Accessory ids form a set; drop duplicates while keeping first-seen order.
    fn normalize_item(item: &mut ParametricItem) {
        let mut seen = std::collections::HashSet::new();
        item.accessory_ids.retain(|id| seen.insert(id.clone()));
    }

    fn live_order(&self, order_id: &str) -> Result<Order> {
        self.order_repo
            .find_by_id(order_id)?
            .filter(|order| !order.is_deleted)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()).into())
    }
}

#[async_trait::async_trait]
impl<O: OrderRepositoryTrait, P: ProposalRepositoryTrait> OrderServiceTrait for OrderService<O, P> {
    async fn create_order(&self, owner_id: &str, new_order: NewOrder) -> Result<Order> {
        Self::validate_days(new_order.days)?;
        if !new_order.primary_item.is_complete() {
            return Err(OrderError::Incomplete(
                "primary item is not fully configured".to_string(),
            )
            .into());
        }

        let mut primary_item = new_order.primary_item;
        Self::normalize_item(&mut primary_item);
        let mut items = new_order.items;
        for item in &mut items {
            Self::normalize_item(item);
        }

        let total = self.pricing.order_total(&primary_item, &items);
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            kind: new_order.kind,
            days: new_order.days,
            primary_item,
            items,
            total,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        debug!("creating order {} with total {}", order.id, order.total);
        self.order_repo.insert(order).await
    }

    async fn update_order(
        &self,
        order_id: &str,
        requester_id: &str,
        update: OrderUpdate,
    ) -> Result<Order> {
        let mut order = self.live_order(order_id)?;
        if order.owner_id != requester_id {
            return Err(OrderError::Forbidden(format!(
                "only the owner may edit order {}",
                order_id
            ))
            .into());
        }
        if self.proposal_repo.has_accepted_for_target(order_id)? {
            return Err(OrderError::Locked(order_id.to_string()).into());
        }

        if let Some(days) = update.days {
            Self::validate_days(days)?;
            order.days = days;
        }
        if let Some(primary_item) = update.primary_item {
            order.primary_item = primary_item;
        }
        if let Some(items) = update.items {
            order.items = items;
        }
        if !order.primary_item.is_complete() {
            return Err(OrderError::Incomplete(
                "edit would leave the primary item incomplete".to_string(),
            )
            .into());
        }

        Self::normalize_item(&mut order.primary_item);
        for item in &mut order.items {
            Self::normalize_item(item);
        }

        // The cached total must never lag the configuration it was derived
        // from; re-derive before the write goes out.
        order.total = self.pricing.order_total(&order.primary_item, &order.items);
        order.updated_at = Utc::now();
        self.order_repo.update(order).await
    }

    async fn delete_order(&self, order_id: &str, requester_id: &str) -> Result<()> {
        let order = self.live_order(order_id)?;
        if order.owner_id != requester_id {
            return Err(OrderError::Forbidden(format!(
                "only the owner may delete order {}",
                order_id
            ))
            .into());
        }
        debug!("deleting order {}", order_id);
        self.order_repo.delete(order_id).await
    }

    fn get_order(&self, order_id: &str) -> Result<Order> {
        self.live_order(order_id)
    }

    fn list_orders(&self, owner_id: &str) -> Result<Vec<Order>> {
        self.order_repo.list_by_owner(owner_id)
    }

    fn baseline_total(&self, order_id: &str) -> Result<i64> {
        let order = self.live_order(order_id)?;
        Ok(order.baseline_total()?)
    }
}
