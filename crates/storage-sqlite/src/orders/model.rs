//! Database models for orders and their parametric items.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::prelude::*;
use log::warn;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use fabriq_core::errors::{DatabaseError, Error, Result};
use fabriq_core::orders::{Order, OrderKind};
use fabriq_core::pricing::{ItemColor, Material, ParametricItem, PriceMode, ProductType, Subtype};

/// Database model for orders.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderDB {
    pub id: String,
    pub owner_id: String,
    pub kind: String,
    pub days: i32,
    pub total: i64,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for one parametric item row. Position 0 is the primary
/// item; additional items follow at 1..n.
#[derive(
    Queryable, Identifiable, Insertable, Associations, Selectable, PartialEq, Debug, Clone,
)]
#[diesel(belongs_to(OrderDB, foreign_key = order_id))]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemDB {
    pub id: String,
    pub order_id: String,
    pub position: i32,
    pub product_type: Option<String>,
    pub subtype: Option<String>,
    pub material: Option<String>,
    pub color: Option<String>,
    pub width: String,
    pub height: String,
    pub quantity: i32,
    pub accessory_ids: String,
    pub price_mode: String,
    pub price_per_area: String,
    pub description: Option<String>,
}

/// Parse a decimal stored as Text, falling back through f64 to ZERO so one
/// bad row degrades that value instead of failing the whole read.
pub(crate) fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(value) => value,
        Err(_) => match value_str.parse::<f64>() {
            Ok(f_val) => Decimal::from_f64(f_val).unwrap_or_else(|| {
                warn!(
                    "failed to convert {} '{}' to Decimal; using 0",
                    field_name, value_str
                );
                Decimal::ZERO
            }),
            Err(_) => {
                warn!(
                    "failed to parse {} '{}' as a number; using 0",
                    field_name, value_str
                );
                Decimal::ZERO
            }
        },
    }
}

impl From<OrderItemDB> for ParametricItem {
    fn from(db: OrderItemDB) -> Self {
        ParametricItem {
            product_type: db.product_type.as_deref().and_then(ProductType::parse),
            subtype: db.subtype.as_deref().and_then(Subtype::parse),
            material: db.material.as_deref().and_then(Material::parse),
            color: db.color.as_deref().and_then(ItemColor::parse),
            width: parse_decimal_tolerant(&db.width, "width"),
            height: parse_decimal_tolerant(&db.height, "height"),
            quantity: db.quantity,
            accessory_ids: serde_json::from_str(&db.accessory_ids).unwrap_or_default(),
            price_mode: PriceMode::parse(&db.price_mode).unwrap_or_default(),
            price_per_area: parse_decimal_tolerant(&db.price_per_area, "price_per_area"),
            description: db.description,
        }
    }
}

impl OrderItemDB {
    pub fn from_domain(order_id: &str, position: i32, item: &ParametricItem) -> Self {
        OrderItemDB {
            id: Uuid::new_v4().to_string(),
            order_id: order_id.to_string(),
            position,
            product_type: item.product_type.map(|v| v.as_str().to_string()),
            subtype: item.subtype.map(|v| v.as_str().to_string()),
            material: item.material.map(|v| v.as_str().to_string()),
            color: item.color.map(|v| v.as_str().to_string()),
            width: item.width.to_string(),
            height: item.height.to_string(),
            quantity: item.quantity,
            accessory_ids: serde_json::to_string(&item.accessory_ids)
                .unwrap_or_else(|_| "[]".to_string()),
            price_mode: item.price_mode.as_str().to_string(),
            price_per_area: item.price_per_area.to_string(),
            description: item.description.clone(),
        }
    }
}

impl From<&Order> for OrderDB {
    fn from(order: &Order) -> Self {
        OrderDB {
            id: order.id.clone(),
            owner_id: order.owner_id.clone(),
            kind: order.kind.as_str().to_string(),
            days: order.days,
            total: order.total,
            is_deleted: order.is_deleted,
            created_at: order.created_at.naive_utc(),
            updated_at: order.updated_at.naive_utc(),
        }
    }
}

/// Item rows for an order: the primary at position 0, additional items after.
pub(crate) fn item_rows(order: &Order) -> Vec<OrderItemDB> {
    std::iter::once(&order.primary_item)
        .chain(order.items.iter())
        .enumerate()
        .map(|(position, item)| OrderItemDB::from_domain(&order.id, position as i32, item))
        .collect()
}

/// Assemble a domain order from its row and item rows.
pub(crate) fn order_from_rows(order: OrderDB, mut items: Vec<OrderItemDB>) -> Result<Order> {
    items.sort_by_key(|item| item.position);
    let mut rows = items.into_iter();
    let primary_item = match rows.next() {
        Some(row) if row.position == 0 => ParametricItem::from(row),
        _ => {
            return Err(Error::Database(DatabaseError::Internal(format!(
                "order {} has no primary item row",
                order.id
            ))))
        }
    };

    let kind = OrderKind::parse(&order.kind).unwrap_or_else(|| {
        warn!("order {} has unknown kind '{}'", order.id, order.kind);
        OrderKind::Project
    });

    Ok(Order {
        id: order.id,
        owner_id: order.owner_id,
        kind,
        days: order.days,
        primary_item,
        items: rows.map(ParametricItem::from).collect(),
        total: order.total,
        is_deleted: order.is_deleted,
        created_at: DateTime::<Utc>::from_naive_utc_and_offset(order.created_at, Utc),
        updated_at: DateTime::<Utc>::from_naive_utc_and_offset(order.updated_at, Utc),
    })
}
