use std::collections::HashSet;
use std::sync::Arc;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::pricing_model::ParametricItem;
use crate::catalog::AccessoryCatalogTrait;

/// Deterministic pricing over parametric items.
///
/// Never fails: unknown accessories price as zero, negative dimensions clamp
/// to zero, and rounding happens exactly once per item, after the quantity
/// multiply.
pub struct PricingService {
    catalog: Arc<dyn AccessoryCatalogTrait>,
}

impl PricingService {
    pub fn new(catalog: Arc<dyn AccessoryCatalogTrait>) -> Self {
        PricingService { catalog }
    }

    /// Sum of catalog unit prices over the deduplicated accessory id set.
    /// Ids with no catalog match contribute zero.
    pub fn accessories_cost(&self, accessory_ids: &[String]) -> Decimal {
        let mut seen = HashSet::new();
        accessory_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.catalog.unit_price(id))
            .sum()
    }

    /// Total for one item, in integer currency units.
    pub fn item_total(&self, item: &ParametricItem) -> i64 {
        let area = item.width.max(Decimal::ZERO) * item.height.max(Decimal::ZERO);
        let subtotal = area * item.effective_price_per_area();
        let line_total = subtotal + self.accessories_cost(&item.accessory_ids);
        let quantity = Decimal::from(item.quantity.max(1));
        let total = (line_total.max(Decimal::ZERO) * quantity)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // Saturates at i64::MAX; the engine never fails.
        total.to_i64().unwrap_or(i64::MAX)
    }

    /// Grand total for a primary item plus its additional items.
    pub fn order_total(&self, primary: &ParametricItem, items: &[ParametricItem]) -> i64 {
        items.iter().fold(self.item_total(primary), |acc, item| {
            acc.saturating_add(self.item_total(item))
        })
    }
}
