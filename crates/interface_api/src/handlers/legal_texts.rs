//! Legal text handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::LegalTextId;
use domain_legal::{LegalText, LegalTextPatch, NewLegalText};

use crate::{error::ApiError, AppState};

/// Lists all legal texts
pub async fn list_legal_texts(
    State(state): State<AppState>,
) -> Result<Json<Vec<LegalText>>, ApiError> {
    Ok(Json(state.legal_texts.list().await?))
}

/// Creates a new legal text
pub async fn create_legal_text(
    State(state): State<AppState>,
    Json(fields): Json<NewLegalText>,
) -> Result<(StatusCode, Json<LegalText>), ApiError> {
    let text = state.legal_texts.create(fields).await?;
    Ok((StatusCode::CREATED, Json(text)))
}

/// Gets a legal text by ID
pub async fn get_legal_text(
    State(state): State<AppState>,
    Path(id): Path<LegalTextId>,
) -> Result<Json<LegalText>, ApiError> {
    Ok(Json(state.legal_texts.get(id).await?))
}

/// Updates a legal text
pub async fn update_legal_text(
    State(state): State<AppState>,
    Path(id): Path<LegalTextId>,
    Json(patch): Json<LegalTextPatch>,
) -> Result<Json<LegalText>, ApiError> {
    Ok(Json(state.legal_texts.update(id, patch).await?))
}

/// Deletes a legal text
pub async fn delete_legal_text(
    State(state): State<AppState>,
    Path(id): Path<LegalTextId>,
) -> Result<StatusCode, ApiError> {
    state.legal_texts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
