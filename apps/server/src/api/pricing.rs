//! Pure pricing endpoints. No authentication: these back the live quote
//! display on configuration forms and never touch stored state.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fabriq_core::catalog::Accessory;
use fabriq_core::pricing::ParametricItem;

use crate::main_lib::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemQuote {
    total: i64,
    effective_price_per_area: Decimal,
    complete: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderQuoteRequest {
    primary_item: ParametricItem,
    #[serde(default)]
    items: Vec<ParametricItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderQuote {
    total: i64,
}

async fn item_total(
    State(state): State<Arc<AppState>>,
    Json(item): Json<ParametricItem>,
) -> Json<ItemQuote> {
    Json(ItemQuote {
        total: state.pricing_service.item_total(&item),
        effective_price_per_area: item.effective_price_per_area(),
        complete: item.is_complete(),
    })
}

async fn order_total(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OrderQuoteRequest>,
) -> Json<OrderQuote> {
    Json(OrderQuote {
        total: state
            .pricing_service
            .order_total(&request.primary_item, &request.items),
    })
}

async fn list_accessories(State(state): State<Arc<AppState>>) -> Json<Vec<Accessory>> {
    Json(state.catalog.list())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pricing/item-total", post(item_total))
        .route("/pricing/order-total", post(order_total))
        .route("/pricing/accessories", get(list_accessories))
}
