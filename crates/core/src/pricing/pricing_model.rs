//! Parametric item model and the fixed pricing factor tables.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Product family; selects the base price per square meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Door,
    Window,
    Railing,
}

impl ProductType {
    /// Base price per square meter, in integer currency units.
    pub fn base_price_per_area(&self) -> Decimal {
        match self {
            ProductType::Door => dec!(500),
            ProductType::Window => dec!(400),
            ProductType::Railing => dec!(380),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Door => "door",
            ProductType::Window => "window",
            ProductType::Railing => "railing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "door" => Some(ProductType::Door),
            "window" => Some(ProductType::Window),
            "railing" => Some(ProductType::Railing),
            _ => None,
        }
    }
}

/// Construction variant; cost multiplier on the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subtype {
    Normal,
    Center,
    Double,
}

impl Subtype {
    pub fn factor(&self) -> Decimal {
        match self {
            Subtype::Normal => dec!(1.00),
            Subtype::Center => dec!(1.10),
            Subtype::Double => dec!(1.20),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Normal => "normal",
            Subtype::Center => "center",
            Subtype::Double => "double",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Subtype::Normal),
            "center" => Some(Subtype::Center),
            "double" => Some(Subtype::Double),
            _ => None,
        }
    }
}

/// Finish color; cost multiplier on the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemColor {
    White,
    Black,
    Silver,
    Bronze,
    Gray,
    Beige,
}

impl ItemColor {
    pub fn factor(&self) -> Decimal {
        match self {
            ItemColor::White => dec!(1.00),
            ItemColor::Black => dec!(1.05),
            ItemColor::Silver => dec!(1.07),
            ItemColor::Bronze => dec!(1.10),
            ItemColor::Gray => dec!(1.05),
            ItemColor::Beige => dec!(1.05),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemColor::White => "white",
            ItemColor::Black => "black",
            ItemColor::Silver => "silver",
            ItemColor::Bronze => "bronze",
            ItemColor::Gray => "gray",
            ItemColor::Beige => "beige",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "white" => Some(ItemColor::White),
            "black" => Some(ItemColor::Black),
            "silver" => Some(ItemColor::Silver),
            "bronze" => Some(ItemColor::Bronze),
            "gray" => Some(ItemColor::Gray),
            "beige" => Some(ItemColor::Beige),
            _ => None,
        }
    }
}

/// Fabrication material. Does not affect price today; kept on the item for
/// extensibility and required by the completeness invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Aluminum,
    Steel,
    Laser,
    Glass,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Aluminum => "aluminum",
            Material::Steel => "steel",
            Material::Laser => "laser",
            Material::Glass => "glass",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "aluminum" => Some(Material::Aluminum),
            "steel" => Some(Material::Steel),
            "laser" => Some(Material::Laser),
            "glass" => Some(Material::Glass),
            _ => None,
        }
    }
}

/// Whether the price per area is engine-derived or caller-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceMode {
    #[default]
    Auto,
    Manual,
}

impl PriceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceMode::Auto => "auto",
            PriceMode::Manual => "manual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(PriceMode::Auto),
            "manual" => Some(PriceMode::Manual),
            _ => None,
        }
    }
}

fn default_quantity() -> i32 {
    1
}

/// One configurable priced unit.
///
/// All fields default so a half-filled form deserializes and prices; the
/// completeness invariant gates persistence and negotiation, not preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParametricItem {
    #[serde(default)]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub subtype: Option<Subtype>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub color: Option<ItemColor>,
    /// Width in meters.
    #[serde(default)]
    pub width: Decimal,
    /// Height in meters.
    #[serde(default)]
    pub height: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub accessory_ids: Vec<String>,
    #[serde(default)]
    pub price_mode: PriceMode,
    /// Caller-supplied price per area; only read in manual mode.
    #[serde(default)]
    pub price_per_area: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl ParametricItem {
    /// Price per square meter in effect for this item.
    ///
    /// Auto mode derives base * subtype * color rounded to the nearest
    /// integer unit (half away from zero); manual mode uses the caller's
    /// value verbatim, clamped to nonnegative. Switching back to auto
    /// recomputes from the current configuration and the manual value is
    /// simply no longer read.
    pub fn effective_price_per_area(&self) -> Decimal {
        match self.price_mode {
            PriceMode::Manual => self.price_per_area.max(Decimal::ZERO),
            PriceMode::Auto => {
                let base = self
                    .product_type
                    .map(|p| p.base_price_per_area())
                    .unwrap_or(Decimal::ZERO);
                let subtype = self.subtype.map(|s| s.factor()).unwrap_or(Decimal::ONE);
                let color = self.color.map(|c| c.factor()).unwrap_or(Decimal::ONE);
                (base * subtype * color)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }

    /// Completeness invariant: an incomplete item may be previewed but must
    /// not be persisted as an order or used as a negotiation baseline.
    pub fn is_complete(&self) -> bool {
        self.product_type.is_some()
            && self.material.is_some()
            && self.width > Decimal::ZERO
            && self.height > Decimal::ZERO
            && self.quantity > 0
            && self.effective_price_per_area() > Decimal::ZERO
    }
}

impl Default for ParametricItem {
    fn default() -> Self {
        ParametricItem {
            product_type: None,
            subtype: None,
            material: None,
            color: None,
            width: Decimal::ZERO,
            height: Decimal::ZERO,
            quantity: 1,
            accessory_ids: Vec::new(),
            price_mode: PriceMode::Auto,
            price_per_area: Decimal::ZERO,
            description: None,
        }
    }
}
