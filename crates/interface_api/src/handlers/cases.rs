//! Case handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::CaseId;
use domain_case::{CasePatch, CourtCase, NewCase};

use crate::{error::ApiError, AppState};

/// Lists all cases
pub async fn list_cases(State(state): State<AppState>) -> Result<Json<Vec<CourtCase>>, ApiError> {
    Ok(Json(state.cases.list().await?))
}

/// Creates a new case
pub async fn create_case(
    State(state): State<AppState>,
    Json(fields): Json<NewCase>,
) -> Result<(StatusCode, Json<CourtCase>), ApiError> {
    let case = state.cases.create(fields).await?;
    Ok((StatusCode::CREATED, Json(case)))
}

/// Gets a case by ID
pub async fn get_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
) -> Result<Json<CourtCase>, ApiError> {
    Ok(Json(state.cases.get(id).await?))
}

/// Updates a case
pub async fn update_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
    Json(patch): Json<CasePatch>,
) -> Result<Json<CourtCase>, ApiError> {
    Ok(Json(state.cases.update(id, patch).await?))
}

/// Deletes a case
pub async fn delete_case(
    State(state): State<AppState>,
    Path(id): Path<CaseId>,
) -> Result<StatusCode, ApiError> {
    state.cases.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
