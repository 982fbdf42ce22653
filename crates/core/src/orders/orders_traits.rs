use crate::errors::Result;
use crate::orders::orders_model::{NewOrder, Order, OrderUpdate};
use async_trait::async_trait;

/// Trait for order repository operations.
///
/// `find_by_id` returns soft-deleted rows too; filtering them is the
/// service's concern so that audit reads stay possible.
#[async_trait]
pub trait OrderRepositoryTrait: Send + Sync {
    fn find_by_id(&self, order_id: &str) -> Result<Option<Order>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Order>>;
    async fn insert(&self, order: Order) -> Result<Order>;
    async fn update(&self, order: Order) -> Result<Order>;
    /// Soft-deletes the order and removes its pending proposals in the same
    /// transaction. Terminal proposals are retained.
    async fn delete(&self, order_id: &str) -> Result<()>;
}

/// Trait for order service operations.
#[async_trait]
pub trait OrderServiceTrait: Send + Sync {
    async fn create_order(&self, owner_id: &str, new_order: NewOrder) -> Result<Order>;
    async fn update_order(
        &self,
        order_id: &str,
        requester_id: &str,
        update: OrderUpdate,
    ) -> Result<Order>;
    async fn delete_order(&self, order_id: &str, requester_id: &str) -> Result<()>;
    fn get_order(&self, order_id: &str) -> Result<Order>;
    fn list_orders(&self, owner_id: &str) -> Result<Vec<Order>>;
    /// Baseline total used to bound proposals; fails on missing or
    /// incomplete orders instead of defaulting to zero.
    fn baseline_total(&self, order_id: &str) -> Result<i64>;
}
