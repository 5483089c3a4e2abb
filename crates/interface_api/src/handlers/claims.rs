//! Claims handlers
//!
//! Payloads are validated before the port is touched, so an invalid update
//! body is rejected whether or not the target claim exists.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use core_kernel::ClaimId;
use domain_claims::ClaimDraft;

use crate::dto::claims::{ClaimRequest, ClaimResponse};
use crate::{error::ApiError, AppState};

type JsonBody = Result<Json<ClaimRequest>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

/// Path ids are bare integers; anything else is rejected by the extractor
fn parse_id(path: IdPath) -> Result<ClaimId, ApiError> {
    let Path(id) = path?;
    Ok(ClaimId::new(id))
}

fn parse_draft(body: JsonBody) -> Result<ClaimDraft, ApiError> {
    let Json(request) = body?;
    Ok(ClaimDraft::try_from(request)?)
}

/// Creates a new claim
pub async fn create_claim(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    let draft = parse_draft(body)?;
    let claim = state.claims.create_claim(draft).await?;

    info!(claim_id = %claim.id, status = %claim.status, "Claim created");
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Lists every claim
pub async fn list_claims(State(state): State<AppState>) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state.claims.list_claims().await?;
    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// Gets a claim by ID
pub async fn get_claim(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_id(path)?;
    let claim = state.claims.get_claim(id).await?;
    Ok(Json(claim.into()))
}

/// Replaces the mutable fields of a claim
pub async fn update_claim(
    State(state): State<AppState>,
    path: IdPath,
    body: JsonBody,
) -> Result<Json<ClaimResponse>, ApiError> {
    let id = parse_id(path)?;
    let draft = parse_draft(body)?;
    let claim = state.claims.update_claim(id, draft).await?;

    info!(claim_id = %claim.id, status = %claim.status, "Claim updated");
    Ok(Json(claim.into()))
}

/// Deletes a claim
pub async fn delete_claim(State(state): State<AppState>, path: IdPath) -> Result<StatusCode, ApiError> {
    let id = parse_id(path)?;
    state.claims.delete_claim(id).await?;

    info!(claim_id = %id, "Claim deleted");
    Ok(StatusCode::NO_CONTENT)
}
