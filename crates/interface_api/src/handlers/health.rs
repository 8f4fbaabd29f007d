//! Health and statistics handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use infra_store::{DocumentStore, ServiceError, StoreStats};

use crate::{error::ApiError, AppState};

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}

/// Aggregate record counts
pub async fn stats(State(state): State<AppState>) -> Result<Json<StoreStats>, ApiError> {
    let doc = state.store.load().await.map_err(ServiceError::from)?;
    Ok(Json(doc.stats()))
}
