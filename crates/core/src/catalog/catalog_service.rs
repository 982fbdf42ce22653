use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog_model::Accessory;
use super::catalog_traits::AccessoryCatalogTrait;
use crate::errors::{Result, ValidationError};

/// In-memory accessory catalog.
///
/// Built from the compiled-in defaults or from a JSON document supplied at
/// startup. Prices are clamped to be nonnegative on load.
pub struct StaticAccessoryCatalog {
    prices: HashMap<String, Decimal>,
}

impl StaticAccessoryCatalog {
    /// Catalog with the built-in accessory price table.
    pub fn with_defaults() -> Self {
        let defaults = [
            ("handle", dec!(20)),
            ("lock", dec!(45)),
            ("hinge-set", dec!(15)),
            ("peephole", dec!(10)),
            ("door-closer", dec!(60)),
            ("mosquito-net", dec!(35)),
            ("glass-panel", dec!(80)),
            ("threshold", dec!(25)),
        ];
        let prices = defaults
            .into_iter()
            .map(|(id, price)| (id.to_string(), price))
            .collect();
        StaticAccessoryCatalog { prices }
    }

    /// Catalog from explicit entries. Later entries win on duplicate ids.
    pub fn from_entries(entries: Vec<Accessory>) -> Self {
        let mut prices = HashMap::with_capacity(entries.len());
        for entry in entries {
            let price = if entry.unit_price < Decimal::ZERO {
                warn!(
                    "accessory '{}' has negative unit price {}; clamping to 0",
                    entry.id, entry.unit_price
                );
                Decimal::ZERO
            } else {
                entry.unit_price
            };
            prices.insert(entry.id, price);
        }
        StaticAccessoryCatalog { prices }
    }

    /// Catalog from a JSON array of `{ "id": ..., "unitPrice": ... }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: Vec<Accessory> = serde_json::from_str(json).map_err(|e| {
            ValidationError::InvalidInput(format!("invalid accessory catalog JSON: {}", e))
        })?;
        Ok(Self::from_entries(entries))
    }
}

impl AccessoryCatalogTrait for StaticAccessoryCatalog {
    fn unit_price(&self, accessory_id: &str) -> Option<Decimal> {
        self.prices.get(accessory_id).copied()
    }

    fn list(&self) -> Vec<Accessory> {
        let mut entries: Vec<Accessory> = self
            .prices
            .iter()
            .map(|(id, price)| Accessory {
                id: id.clone(),
                unit_price: *price,
            })
            .collect();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        entries
    }
}
