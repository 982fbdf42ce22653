//! Accessory catalog models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced accessory. Immutable reference data; the catalog has no
/// lifecycle beyond process startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub id: String,
    pub unit_price: Decimal,
}
