use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use fabriq_core::orders::{NewOrder, Order, OrderUpdate};
use fabriq_core::proposals::Proposal;

use crate::auth::Principal;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn create_order(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(new_order): Json<NewOrder>,
) -> ApiResult<Json<Order>> {
    if !principal.may_create_orders() {
        return Err(ApiError::forbidden("only customers may create orders"));
    }
    let order = state
        .order_service
        .create_order(&principal.id, new_order)
        .await?;
    Ok(Json(order))
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.order_service.list_orders(&principal.id)?;
    Ok(Json(orders))
}

async fn get_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    _principal: Principal,
) -> ApiResult<Json<Order>> {
    // Readable by any authenticated principal: bidders need the
    // configuration and baseline to shape a proposal.
    let order = state.order_service.get_order(&id)?;
    Ok(Json(order))
}

async fn update_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(update): Json<OrderUpdate>,
) -> ApiResult<Json<Order>> {
    let order = state
        .order_service
        .update_order(&id, &principal.id, update)
        .await?;
    Ok(Json(order))
}

async fn delete_order(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> ApiResult<StatusCode> {
    state.order_service.delete_order(&id, &principal.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_order_proposals(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> ApiResult<Json<Vec<Proposal>>> {
    let proposals = state.proposal_service.list_for_target(&id, &principal.id)?;
    Ok(Json(proposals))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/orders/{id}/proposals", get(list_order_proposals))
}
