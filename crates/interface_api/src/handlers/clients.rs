//! Client handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::ClientId;
use domain_client::{Client, ClientPatch, NewClient};

use crate::{error::ApiError, AppState};

/// Lists all clients
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(state.clients.list().await?))
}

/// Creates a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(fields): Json<NewClient>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let client = state.clients.create(fields).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Gets a client by ID
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(state.clients.get(id).await?))
}

/// Updates a client
pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
    Json(patch): Json<ClientPatch>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(state.clients.update(id, patch).await?))
}

/// Deletes a client and its cases
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
