use rust_decimal::Decimal;

use super::catalog_model::Accessory;

/// Trait for read-only accessory price lookups.
///
/// Lookups are infallible: an id the catalog does not know is simply
/// unpriced, not an error.
pub trait AccessoryCatalogTrait: Send + Sync {
    /// Unit price for an accessory id, if the catalog carries it.
    fn unit_price(&self, accessory_id: &str) -> Option<Decimal>;

    /// All catalog entries, sorted by id.
    fn list(&self) -> Vec<Accessory>;
}
