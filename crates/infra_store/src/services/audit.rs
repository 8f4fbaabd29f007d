//! Audit trail reader
//!
//! The trail is written by the client and case services; this service
//! only reads it back, newest entry first.

use std::sync::Arc;

use domain_audit::AuditEntry;

use crate::error::ServiceError;
use crate::store::DocumentStore;

/// Read side of the audit trail
#[derive(Clone)]
pub struct AuditTrail {
    store: Arc<dyn DocumentStore>,
}

impl AuditTrail {
    /// Creates a new trail reader over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Returns all entries, newest first
    pub async fn list(&self) -> Result<Vec<AuditEntry>, ServiceError> {
        Ok(self.store.load().await?.audit_logs)
    }
}
