//! Audit trail handlers

use axum::{extract::State, Json};

use domain_audit::AuditEntry;

use crate::{error::ApiError, AppState};

/// Lists the audit trail, newest entry first
pub async fn list_audit_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuditEntry>>, ApiError> {
    Ok(Json(state.audit.list().await?))
}
