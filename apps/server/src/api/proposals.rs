use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use fabriq_core::proposals::{NewProposal, Proposal, ProposalStatus, ProposalUpdate};

use crate::auth::Principal;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn create_proposal(
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(new_proposal): Json<NewProposal>,
) -> ApiResult<Json<Proposal>> {
    if !principal.may_bid_on(new_proposal.target_kind) {
        return Err(ApiError::forbidden(
            "only vendors may bid on projects and only technicians may offer on services",
        ));
    }
    let proposal = state
        .proposal_service
        .create_proposal(&principal.id, new_proposal)
        .await?;
    Ok(Json(proposal))
}

async fn update_proposal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(update): Json<ProposalUpdate>,
) -> ApiResult<Json<Proposal>> {
    let proposal = state
        .proposal_service
        .update_proposal(&id, &principal.id, update)
        .await?;
    Ok(Json(proposal))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusChange {
    status: ProposalStatus,
}

async fn set_proposal_status(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    principal: Principal,
    Json(change): Json<StatusChange>,
) -> ApiResult<Json<Proposal>> {
    let proposal = state
        .proposal_service
        .set_status(&id, &principal.id, change.status)
        .await?;
    Ok(Json(proposal))
}

async fn list_my_proposals(
    State(state): State<Arc<AppState>>,
    principal: Principal,
) -> ApiResult<Json<Vec<Proposal>>> {
    let proposals = state.proposal_service.list_for_bidder(&principal.id)?;
    Ok(Json(proposals))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/proposals", get(list_my_proposals).post(create_proposal))
        .route("/proposals/{id}", put(update_proposal))
        .route("/proposals/{id}/status", post(set_proposal_status))
}
